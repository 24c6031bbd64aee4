use log::warn;

use crate::{
    draw::{Collection, Label, LabelLocation, Primitive, StrokeDefinition},
    geometry::Point,
    layer::Layer,
    op::Operation,
};

/// A fully-connected fan of lines between per-feature slots on the facing
/// edges of two layers.
///
/// Slot pitch comes from the layer's own [`slot_spacing`] when it has
/// discrete slots and is estimated from the edge height otherwise, so the
/// fan lines land on drawn features where there are any.
///
/// [`slot_spacing`]: crate::layer::Layer::slot_spacing
#[derive(Debug, Clone)]
pub struct Dense {
    num_a: usize,
    num_b: usize,
    limit_a: Option<usize>,
    limit_b: Option<usize>,
    stroke: StrokeDefinition,
    label: Option<Label>,
}

impl Dense {
    /// Creates a fan with `num_a` slots on the source side and `num_b` on
    /// the target side.
    ///
    /// A zero count on either side degenerates to a single center-to-center
    /// line at collection time instead of failing.
    pub fn new(num_a: usize, num_b: usize) -> Self {
        Self {
            num_a,
            num_b,
            limit_a: None,
            limit_b: None,
            stroke: StrokeDefinition::default(),
            label: None,
        }
    }

    /// Keeps only the first and last `ends` lines on both sides (builder
    /// style).
    pub fn with_limited_ends(mut self, ends: usize) -> Self {
        self.limit_a = Some(ends);
        self.limit_b = Some(ends);
        self
    }

    /// Keeps only the first and last lines per side, with independent counts
    /// (`None` draws the full side) (builder style).
    pub fn with_limited_ends_each(mut self, ends_a: Option<usize>, ends_b: Option<usize>) -> Self {
        self.limit_a = ends_a;
        self.limit_b = ends_b;
        self
    }

    /// Sets the stroke definition (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label, placed below the fan (builder style).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(Label::new(text).with_location(LabelLocation::Below));
        self
    }

    fn side_indices(count: usize, limit: Option<usize>) -> Vec<usize> {
        match limit {
            None => (0..count).collect(),
            Some(ends) => (0..ends.min(count))
                .chain(count.saturating_sub(ends)..count)
                .collect(),
        }
    }

    /// Vertical pitch and first-slot offset for one side of the fan.
    fn side_metrics(layer: &dyn Layer, count: usize, edge_span: f32) -> (f32, f32) {
        match layer.slot_spacing() {
            Some(pitch) => (pitch, layer.base_size().height() / 2.0),
            None => {
                let estimated = edge_span.abs() / count as f32;
                (estimated, estimated / 2.0)
            }
        }
    }
}

impl Operation for Dense {
    fn collect(&self, a: &dyn Layer, b: &dyn Layer) -> Collection {
        let mut collection = Collection::with_stroke(self.stroke.clone());

        if self.num_a == 0 || self.num_b == 0 {
            warn!(
                num_a = self.num_a,
                num_b = self.num_b;
                "Dense fan with a zero slot count, connecting centers instead",
            );
            let start_corner = a.corners().bottom_right();
            let end_corner = b.corners().top_left();
            collection.push(Primitive::Lines {
                segments: vec![vec![
                    Point::new(
                        start_corner.x(),
                        start_corner.y() + a.extent().height() / 2.0,
                    ),
                    Point::new(end_corner.x(), end_corner.y() - b.extent().height() / 2.0),
                ]],
            });
            return collection;
        }

        let ca = a.corners();
        let cb = b.corners();
        let (top_a, bottom_a) = (ca.top_right(), ca.bottom_right());
        let (top_b, bottom_b) = (cb.top_left(), cb.bottom_left());

        let (pitch_a, offset_a) = Self::side_metrics(a, self.num_a, bottom_a.y() - top_a.y());
        let (pitch_b, offset_b) = Self::side_metrics(b, self.num_b, bottom_b.y() - top_b.y());

        // Slanted stacks also step horizontally from top corner to bottom corner
        let step_ax = (bottom_a.x() - top_a.x()) / self.num_a as f32;
        let step_bx = (bottom_b.x() - top_b.x()) / self.num_b as f32;

        let base_a = Point::new(top_a.x() + step_ax / 2.0, top_a.y() - offset_a);
        let base_b = Point::new(top_b.x() + step_bx / 2.0, top_b.y() - offset_b);

        let mut segments = Vec::new();
        for &i in &Self::side_indices(self.num_a, self.limit_a) {
            for &j in &Self::side_indices(self.num_b, self.limit_b) {
                segments.push(vec![
                    Point::new(
                        base_a.x() + step_ax * i as f32,
                        base_a.y() - pitch_a * i as f32,
                    ),
                    Point::new(
                        base_b.x() + step_bx * j as f32,
                        base_b.y() - pitch_b * j as f32,
                    ),
                ]);
            }
        }

        collection.push(Primitive::Lines { segments });
        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
