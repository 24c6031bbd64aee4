//! Layers: the positioned visual objects of a diagram.
//!
//! Every layer kind implements the [`Layer`] trait, which exposes the
//! geometry operations and operations need (attachment [`Corners`], extent,
//! anchor position) and produces the layer's drawable primitives.
//!
//! # Anchor convention
//!
//! A layer's anchor `(x, y)` is the bottom-left corner of its *base* shape:
//! the first rectangle of a stack, the first circle of a column. Stacked
//! kinds extend right/down from there, so the anchor is generally not the
//! bottom-left of the full extent. [`PolyShape`] is the one exception; its
//! anchor is the polygon's center.
//!
//! Construction validates dimensions; a renderer assigns the final position
//! before primitives are collected. When no explicit vertical position is
//! given, a layer centers its full extent about `y = 0`, which is the shared
//! baseline of the sequential renderer.

mod block;
mod cell_column;
mod feature_maps;
mod image_box;
mod neuron_column;
mod poly_shape;
mod slab;

pub use block::Block;
pub use cell_column::CellColumn;
pub use feature_maps::FeatureMaps;
pub use image_box::ImageBox;
pub use neuron_column::NeuronColumn;
pub use poly_shape::PolyShape;
pub use slab::Slab;

use crate::{
    color::Color,
    draw::{Collection, Label},
    error::StrataError,
    geometry::{Bounds, Corners, Point, Size},
};

/// A positioned visual element of a diagram.
pub trait Layer: std::fmt::Debug {
    /// Returns the four attachment corners of the full graphic extent at the
    /// current position.
    fn corners(&self) -> Corners;

    /// Returns the total size of the graphic, including stacking offsets.
    fn extent(&self) -> Size;

    /// Returns the size of the base shape, used for connector anchoring.
    fn base_size(&self) -> Size;

    /// Returns the anchor position.
    fn position(&self) -> Point;

    /// Relocates the layer; corners and primitives reflect the new position
    /// on the next call.
    fn set_position(&mut self, position: Point);

    /// Produces the drawable primitives for this layer at its current
    /// position. Pure: repeated calls without an intervening move yield
    /// identical geometry.
    fn collect(&self) -> Collection;

    /// Returns the layer's label, if any.
    fn label(&self) -> Option<&Label> {
        None
    }

    /// Vertical pitch between per-feature slots, when the layer has
    /// discrete slots along its side edges. Dense fans use this to line up
    /// with the drawn features instead of estimating from the edge height.
    fn slot_spacing(&self) -> Option<f32> {
        None
    }

    /// Moves the layer horizontally, keeping its vertical position.
    fn set_x(&mut self, x: f32) {
        let y = self.position().y();
        self.set_position(Point::new(x, y));
    }

    /// Returns the axis-aligned extent at the current position.
    fn bounds(&self) -> Bounds {
        self.corners().bounds()
    }
}

/// Rejects zero or negative dimensions, which break corner math and
/// connector anchoring.
pub(crate) fn ensure_positive(value: f32, what: &str) -> Result<(), StrataError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(StrataError::InvalidGeometry(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

// Default palette of the stock layer kinds.

pub(crate) fn channel_light() -> Color {
    Color::new("#b3b3b3").unwrap()
}

pub(crate) fn channel_dark() -> Color {
    Color::new("#666666").unwrap()
}

pub(crate) fn default_fill() -> Color {
    Color::new("#e6e6e6").unwrap()
}

pub(crate) fn placeholder_fill() -> Color {
    Color::new("#1a1a1a").unwrap()
}

/// Display-limiting settings shared by the stacked layer kinds.
///
/// When a stack has many repeated shapes, only `shown` slots are rendered:
/// `ends` full shapes at each end and a placeholder dot every `skip`
/// interior slots, matching the drawn geometry the dense fan anchors to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DisplayLimit {
    pub shown: usize,
    pub ends: usize,
    pub skip: usize,
    pub placeholder_radius: f32,
}

impl DisplayLimit {
    /// Builds a limit, clamping the end count so both ends fit within the
    /// shown slots (the original behavior for oversized end requests).
    pub fn new(shown: usize, ends: usize, skip: usize, placeholder_radius: f32) -> Self {
        let ends = if ends * 2 > shown { shown / 2 } else { ends };
        Self {
            shown,
            ends,
            skip,
            placeholder_radius,
        }
    }

    /// Number of interior slots replaced by placeholders.
    pub fn interior(&self) -> usize {
        self.shown.saturating_sub(2 * self.ends)
    }
}
