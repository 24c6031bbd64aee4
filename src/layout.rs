//! Renderers: they own the diagram's layers and operations, assign final
//! positions, and assemble a [`Scene`] for the drawing surface.
//!
//! Two layout strategies are provided. [`SequentialRenderer`] places layers
//! left to right in insertion order and connects adjacent pairs by matching
//! operation index; [`FreeformRenderer`] keys layers by id and leaves
//! placement to the caller, inferring only vertical centering.

mod freeform;
mod scene;
mod sequential;

pub use freeform::FreeformRenderer;
pub use scene::Scene;
pub use sequential::SequentialRenderer;

use crate::{
    config::RenderOptions,
    draw::{LabelLocation, PlacedLabel, VerticalAlign},
    geometry::{Bounds, Point},
    layer::Layer,
    op::Operation,
};

/// Folds the layers' extents into the diagram's content bounds.
fn content_bounds<'a>(mut layers: impl Iterator<Item = &'a dyn Layer>) -> Bounds {
    let first = match layers.next() {
        Some(layer) => layer.bounds(),
        None => return Bounds::default(),
    };
    layers.fold(first, |acc, layer| acc.merge(&layer.bounds()))
}

/// Resolves a layer label against the layer's extent (or the diagram limits
/// when `offset_from_limits` is set).
fn place_layer_label(
    layer: &dyn Layer,
    limits: Bounds,
    options: &RenderOptions,
) -> Option<PlacedLabel> {
    let label = layer.label().filter(|label| !label.is_empty())?;

    let bounds = layer.bounds();
    let x = (bounds.min_x() + bounds.max_x()) / 2.0;
    let offset = options.text_offset();

    let (y, align) = match (label.location(), options.offset_from_limits()) {
        (LabelLocation::Above, false) => (bounds.max_y() + offset, VerticalAlign::Bottom),
        (LabelLocation::Above, true) => (limits.max_y() - offset, VerticalAlign::Top),
        (LabelLocation::Below, false) => (bounds.min_y() - offset, VerticalAlign::Top),
        (LabelLocation::Below, true) => (limits.min_y() + offset, VerticalAlign::Bottom),
    };

    Some(PlacedLabel::new(label, Point::new(x, y), align))
}

/// Resolves an operation label between its two endpoint layers.
fn place_operation_label(
    operation: &dyn Operation,
    a: &dyn Layer,
    b: &dyn Layer,
    limits: Bounds,
    options: &RenderOptions,
) -> Option<PlacedLabel> {
    let label = operation.label().filter(|label| !label.is_empty())?;

    let x = operation.label_anchor_x(a, b);
    let offset = options.text_offset();
    let (bounds_a, bounds_b) = (a.bounds(), b.bounds());

    let (y, align) = match (label.location(), options.offset_from_limits()) {
        (LabelLocation::Above, false) => (
            bounds_a.max_y().max(bounds_b.max_y()) + offset,
            VerticalAlign::Bottom,
        ),
        (LabelLocation::Above, true) => (limits.max_y() - offset, VerticalAlign::Top),
        (LabelLocation::Below, false) => (
            bounds_a.min_y().min(bounds_b.min_y()) - offset,
            VerticalAlign::Top,
        ),
        (LabelLocation::Below, true) => (limits.min_y() + offset, VerticalAlign::Bottom),
    };

    Some(PlacedLabel::new(label, Point::new(x, y), align))
}
