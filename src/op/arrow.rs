use crate::{
    draw::{Collection, Label, LabelLocation, Primitive, StrokeDefinition},
    geometry::Point,
    layer::Layer,
    op::Operation,
};

/// A horizontal arrow from the right side of one layer to the left side of
/// the next, with an open triangular head at the midpoint.
#[derive(Debug, Clone)]
pub struct Arrow {
    size: f32,
    inset: Option<f32>,
    stroke: StrokeDefinition,
    label: Option<Label>,
}

impl Default for Arrow {
    fn default() -> Self {
        Self::new()
    }
}

impl Arrow {
    pub fn new() -> Self {
        Self {
            size: 3.0,
            inset: None,
            stroke: StrokeDefinition::default(),
            label: None,
        }
    }

    /// Sets the arrowhead size (builder style).
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Sets the gap kept between the shaft and each layer; defaults to 5%
    /// of the span (builder style).
    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = Some(inset);
        self
    }

    /// Sets the stroke definition (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label, placed below the arrow (builder style).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(Label::new(text).with_location(LabelLocation::Below));
        self
    }
}

impl Operation for Arrow {
    fn collect(&self, a: &dyn Layer, b: &dyn Layer) -> Collection {
        // Endpoints: vertical middle of A's right extent, of B's left extent
        let start_corner = a.corners().bottom_right();
        let end_corner = b.corners().top_left();
        let x1 = start_corner.x();
        let y1 = start_corner.y() + a.extent().height() / 2.0;
        let x2 = end_corner.x();
        let y2 = end_corner.y() - b.extent().height() / 2.0;

        let inset = self.inset.unwrap_or(0.05 * (x2 - x1).abs());
        let x_mid = (x1 + x2) / 2.0 + self.size / 2.0;
        let y_mid = (y1 + y2) / 2.0;

        let mut collection = Collection::with_stroke(self.stroke.clone());
        collection.push(Primitive::Lines {
            segments: vec![
                vec![
                    Point::new(x1 + inset, y1),
                    Point::new(x_mid - self.size, y_mid),
                ],
                vec![Point::new(x_mid, y_mid), Point::new(x2 - inset, y2)],
                vec![
                    Point::new(x_mid - self.size, y_mid + self.size),
                    Point::new(x_mid, y_mid),
                    Point::new(x_mid - self.size, y_mid - self.size),
                    Point::new(x_mid - self.size, y_mid + self.size),
                ],
            ],
        });
        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
