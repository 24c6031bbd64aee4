use crate::{
    draw::{Collection, Label, LabelLocation, Primitive, StrokeDefinition},
    layer::Layer,
    op::Operation,
};

/// Two plain lines joining the right corners of one layer to the left
/// corners of the next, tracing the silhouette of a flattening/reshaping
/// step.
#[derive(Debug, Clone, Default)]
pub struct Link {
    stroke: StrokeDefinition,
    label: Option<Label>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stroke definition (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label, placed below the lines (builder style).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(Label::new(text).with_location(LabelLocation::Below));
        self
    }
}

impl Operation for Link {
    fn collect(&self, a: &dyn Layer, b: &dyn Layer) -> Collection {
        let ca = a.corners();
        let cb = b.corners();

        let mut collection = Collection::with_stroke(self.stroke.clone());
        collection.push(Primitive::Lines {
            segments: vec![
                vec![ca.top_right(), cb.top_left()],
                vec![ca.bottom_right(), cb.bottom_left()],
            ],
        });
        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
