//! Text labels attached to layers and operations.

use std::str::FromStr;

use crate::geometry::Point;

const DEFAULT_FONT_SIZE: u16 = 14;

/// Where a label is placed relative to its owning element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelLocation {
    /// Above the element's extent (default for layers)
    #[default]
    Above,
    /// Below the element's extent (default for operations)
    Below,
}

impl FromStr for LabelLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" => Ok(Self::Above),
            "below" => Ok(Self::Below),
            _ => Err(format!(
                "invalid label location `{s}`, valid values: above, below"
            )),
        }
    }
}

/// A text label owned by a layer or operation.
///
/// The label only knows its text and preferred side; the renderer resolves
/// the actual anchor position during scene assembly.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    location: LabelLocation,
    font_size: u16,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: LabelLocation::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Sets the placement side (builder style).
    pub fn with_location(mut self, location: LabelLocation) -> Self {
        self.location = location;
        self
    }

    /// Sets the font size in pixels (builder style).
    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn location(&self) -> LabelLocation {
        self.location
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns `true` if there is no text to draw.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Vertical alignment of a placed label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// The top of the text block sits at the anchor (text flows downward)
    Top,
    /// The bottom of the text block sits at the anchor (text grows upward)
    Bottom,
}

/// A label with its anchor resolved by a renderer.
///
/// The anchor is the horizontal center of the text block; [`VerticalAlign`]
/// states which side of the block touches the anchor's y-coordinate.
#[derive(Debug, Clone)]
pub struct PlacedLabel {
    text: String,
    anchor: Point,
    align: VerticalAlign,
    font_size: u16,
}

impl PlacedLabel {
    pub fn new(label: &Label, anchor: Point, align: VerticalAlign) -> Self {
        Self {
            text: label.text().to_string(),
            anchor,
            align,
            font_size: label.font_size(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn align(&self) -> VerticalAlign {
        self.align
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Iterates over the label's lines, splitting on newlines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}
