use crate::{
    color::Color,
    draw::{Collection, Label, LabelLocation, Primitive},
    error::StrataError,
    geometry::{Corners, Point, Size},
    layer::{Layer, default_fill, ensure_positive},
};

/// A single parallelogram projected at 45 degrees, used to draw flattened
/// feature vectors between 2D stacks.
///
/// Anchor exception: `(x, y)` is the top-left corner of the upper edge, since
/// the slab extends down-right from there.
#[derive(Debug, Clone)]
pub struct Slab {
    width: f32,
    height: f32,
    fill: Color,
    x: f32,
    y: f32,
    label: Option<Label>,
}

impl Slab {
    /// Creates a slab with edge width `width` and slanted length `height`,
    /// vertically centered about the baseline until positioned.
    pub fn new(width: f32, height: f32) -> Result<Self, StrataError> {
        ensure_positive(width, "slab width")?;
        ensure_positive(height, "slab height")?;

        let mut slab = Self {
            width,
            height,
            fill: default_fill(),
            x: 0.0,
            y: 0.0,
            label: None,
        };
        slab.y = slab.extent().height() / 2.0;
        Ok(slab)
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

    /// Sets which side the label is placed on (builder style).
    pub fn with_label_location(mut self, location: LabelLocation) -> Self {
        if let Some(label) = self.label.take() {
            self.label = Some(label.with_location(location));
        }
        self
    }

    /// Places the slab explicitly (builder style).
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Horizontal and vertical run of the 45-degree projection.
    fn projection(&self) -> f32 {
        self.height / std::f32::consts::SQRT_2
    }
}

impl Layer for Slab {
    fn corners(&self) -> Corners {
        let extent = self.extent();
        Corners::new(
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(
                self.x + extent.width() - self.width,
                self.y - extent.height(),
            ),
            Point::new(self.x + extent.width(), self.y - extent.height()),
        )
    }

    fn extent(&self) -> Size {
        let projection = self.projection();
        Size::new(self.width + projection, projection)
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
        let extent = self.extent();
        let mut collection = Collection::new();
        collection.push_filled(
            Primitive::Polygon {
                points: vec![
                    Point::new(self.x, self.y),
                    Point::new(self.x + self.width, self.y),
                    Point::new(self.x + extent.width(), self.y - extent.height()),
                    Point::new(
                        self.x + extent.width() - self.width,
                        self.y - extent.height(),
                    ),
                ],
            },
            self.fill,
        );
        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
