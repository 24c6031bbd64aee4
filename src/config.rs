//! Render configuration.
//!
//! [`RenderOptions`] groups the knobs both renderers share: spacing between
//! layers, diagram margins, and label placement. All fields deserialize from
//! TOML so a rendering script can keep its styling in a config file, with
//! missing fields falling back to the defaults.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{color::Color, error::StrataError};

/// Options controlling layout spacing, margins, and label placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Horizontal gap between sequentially placed layers; narrow layers get
    /// one and a half times this gap.
    horizontal_spacing: f32,

    /// Diagonal clearance between slanted stacks in the sequential layout.
    diagonal_spacing: f32,

    /// Fractional margin of the diagram width added to the left and right.
    x_margin: f32,

    /// Fractional margin of the diagram height added above and below.
    y_margin: f32,

    /// Distance between an element and its label.
    text_offset: f32,

    /// Place labels relative to the diagram limits instead of each
    /// element's own extent.
    offset_from_limits: bool,

    /// Background color of the rendered diagram, as a CSS color string.
    background_color: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            horizontal_spacing: 100.0,
            diagonal_spacing: 200.0,
            x_margin: 0.05,
            y_margin: 0.3,
            text_offset: 10.0,
            offset_from_limits: false,
            background_color: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StrataError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(StrataError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| StrataError::Config(err.to_string()))
    }

    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    pub fn diagonal_spacing(&self) -> f32 {
        self.diagonal_spacing
    }

    pub fn x_margin(&self) -> f32 {
        self.x_margin
    }

    pub fn y_margin(&self) -> f32 {
        self.y_margin
    }

    pub fn text_offset(&self) -> f32 {
        self.text_offset
    }

    pub fn offset_from_limits(&self) -> bool {
        self.offset_from_limits
    }

    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Config`] if the configured color string cannot
    /// be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, StrataError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| StrataError::Config(format!("invalid background color: {err}")))
    }

    /// Sets the horizontal spacing (builder style).
    pub fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Sets the diagonal spacing (builder style).
    pub fn with_diagonal_spacing(mut self, spacing: f32) -> Self {
        self.diagonal_spacing = spacing;
        self
    }

    /// Sets the fractional margins (builder style).
    pub fn with_margins(mut self, x_margin: f32, y_margin: f32) -> Self {
        self.x_margin = x_margin;
        self.y_margin = y_margin;
        self
    }

    /// Sets the label offset (builder style).
    pub fn with_text_offset(mut self, offset: f32) -> Self {
        self.text_offset = offset;
        self
    }

    /// Places labels relative to the diagram limits (builder style).
    pub fn with_offset_from_limits(mut self, enabled: bool) -> Self {
        self.offset_from_limits = enabled;
        self
    }

    /// Sets the background color string (builder style).
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.horizontal_spacing(), 100.0);
        assert_eq!(options.diagonal_spacing(), 200.0);
        assert_eq!(options.x_margin(), 0.05);
        assert_eq!(options.y_margin(), 0.3);
        assert_eq!(options.text_offset(), 10.0);
        assert!(!options.offset_from_limits());
        assert!(options.background_color().unwrap().is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options: RenderOptions =
            toml::from_str("horizontal_spacing = 60.0\nbackground_color = \"white\"").unwrap();
        assert_eq!(options.horizontal_spacing(), 60.0);
        assert_eq!(options.diagonal_spacing(), 200.0);
        assert!(options.background_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_background_color() {
        let options = RenderOptions::default().with_background_color("no-such-color!");
        assert!(matches!(
            options.background_color(),
            Err(StrataError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            RenderOptions::load("does-not-exist.toml"),
            Err(StrataError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        writeln!(file, "text_offset = 6.0").unwrap();

        let options = RenderOptions::load(file.path()).unwrap();
        assert_eq!(options.text_offset(), 6.0);
        assert_eq!(options.horizontal_spacing(), 100.0);
    }
}
