//! Operations: connectors drawn between two layers.
//!
//! An operation never owns its endpoints; it reads their resolved geometry
//! through the [`Layer`] trait when the renderer asks for primitives. This
//! keeps operations stateless and composable: any number of operations can
//! overlay the same pair of layers, each producing an independent
//! [`Collection`].

mod arrow;
mod conv;
mod dense;
mod gap;
mod link;
mod skip;

pub use arrow::Arrow;
pub use conv::Conv;
pub use dense::Dense;
pub use gap::Gap;
pub use link::Link;
pub use skip::Skip;

use crate::{
    draw::{Collection, Label},
    layer::Layer,
};

/// A connector producing visual primitives between two resolved layers.
pub trait Operation: std::fmt::Debug {
    /// Produces the primitives connecting layer `a` (left/source) to layer
    /// `b` (right/target), computed from their current corners. Pure: no
    /// state is carried between calls.
    fn collect(&self, a: &dyn Layer, b: &dyn Layer) -> Collection;

    /// Returns the operation's label, if any.
    fn label(&self) -> Option<&Label> {
        None
    }

    /// Horizontal anchor for the label: the middle of the gap between the
    /// two layers' extents unless a kind has a better anchor.
    fn label_anchor_x(&self, a: &dyn Layer, b: &dyn Layer) -> f32 {
        (a.bounds().max_x() + b.bounds().min_x()) / 2.0
    }
}
