use color::DynamicColor;
use std::str::FromStr;

/// Wrapper around the `DynamicColor` type from the color crate.
/// Provides the convenience methods the rest of the crate needs for
/// working with CSS color strings.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Returns the alpha component of this color in the range 0-1
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_color() {
        let color = Color::new("black").unwrap();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_parse_invalid_color() {
        let result = Color::new("not-a-color-at-all");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_opaque_alpha() {
        let color = Color::new("#336699").unwrap();
        assert_eq!(color.alpha(), 1.0);
    }
}
