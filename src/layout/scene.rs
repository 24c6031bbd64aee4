use crate::{
    color::Color,
    draw::{Collection, PlacedLabel},
    geometry::Bounds,
};

/// A fully resolved diagram, ready for a drawing surface.
///
/// Holds the primitive collections in draw order (layers first, then
/// operations), the placed labels, the viewport bounds with margins already
/// applied, and the configured background color. Scenes are plain data:
/// rendering the same scene twice produces the same output.
#[derive(Debug, Default)]
pub struct Scene {
    collections: Vec<Collection>,
    labels: Vec<PlacedLabel>,
    bounds: Bounds,
    background: Option<Color>,
}

impl Scene {
    pub(crate) fn new(
        collections: Vec<Collection>,
        labels: Vec<PlacedLabel>,
        bounds: Bounds,
        background: Option<Color>,
    ) -> Self {
        Self {
            collections,
            labels,
            bounds,
            background,
        }
    }

    /// Returns the primitive collections in draw order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Returns the placed labels.
    pub fn labels(&self) -> &[PlacedLabel] {
        &self.labels
    }

    /// Returns the viewport bounds, margins included.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the configured background color, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Returns `true` if the scene holds nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.labels.is_empty()
    }
}
