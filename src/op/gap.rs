use crate::{
    draw::{Collection, Label, LabelLocation},
    layer::Layer,
    op::Operation,
};

/// An operation that draws nothing.
///
/// Keeps a pair of adjacent layers visually unconnected while still carrying
/// a label in the gap between them.
#[derive(Debug, Clone, Default)]
pub struct Gap {
    label: Option<Label>,
}

impl Gap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label, placed below the gap (builder style).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(Label::new(text).with_location(LabelLocation::Below));
        self
    }
}

impl Operation for Gap {
    fn collect(&self, _a: &dyn Layer, _b: &dyn Layer) -> Collection {
        Collection::new()
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
