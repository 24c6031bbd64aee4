use crate::{
    color::Color,
    draw::{Collection, Label, LabelLocation, Primitive},
    error::StrataError,
    geometry::{Corners, Point, Size},
    layer::{Layer, default_fill, ensure_positive},
};

/// A single filled rectangle, the plainest diagram object.
#[derive(Debug, Clone)]
pub struct Block {
    width: f32,
    height: f32,
    x: f32,
    y: f32,
    fill: Color,
    label: Option<Label>,
}

impl Block {
    /// Creates a block with the given base dimensions, vertically centered
    /// about the baseline until positioned.
    pub fn new(width: f32, height: f32) -> Result<Self, StrataError> {
        ensure_positive(width, "block width")?;
        ensure_positive(height, "block height")?;

        Ok(Self {
            width,
            height,
            x: 0.0,
            y: -height / 2.0,
            fill: default_fill(),
            label: None,
        })
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the label text (builder style).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(Label::new(text));
        self
    }

    /// Sets which side of the block the label is placed on (builder style).
    pub fn with_label_location(mut self, location: LabelLocation) -> Self {
        if let Some(label) = self.label.take() {
            self.label = Some(label.with_location(location));
        }
        self
    }

    /// Places the block explicitly (builder style).
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

impl Layer for Block {
    fn corners(&self) -> Corners {
        Corners::new(
            Point::new(self.x, self.y + self.height),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
        )
    }

    fn extent(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn base_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, position: Point) {
        self.x = position.x();
        self.y = position.y();
    }

    fn collect(&self) -> Collection {
        let mut collection = Collection::new();
        collection.push_filled(
            Primitive::Rect {
                origin: Point::new(self.x, self.y),
                size: Size::new(self.width, self.height),
            },
            self.fill,
        );
        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
