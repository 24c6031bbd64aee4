use crate::{
    draw::{Collection, Label, LabelLocation, Primitive},
    error::StrataError,
    geometry::{Corners, Point, Size},
    layer::{Layer, ensure_positive},
};

/// An embedded raster image with a frame, or a crossed placeholder box when
/// no image source is given.
#[derive(Debug, Clone)]
pub struct ImageBox {
    width: f32,
    height: f32,
    href: Option<String>,
    x: f32,
    y: f32,
    label: Option<Label>,
}

impl ImageBox {
    /// Creates an image box of the given size, vertically centered about the
    /// baseline until positioned.
    pub fn new(width: f32, height: f32) -> Result<Self, StrataError> {
        ensure_positive(width, "image width")?;
        ensure_positive(height, "image height")?;

        Ok(Self {
            width,
            height,
            href: None,
            x: 0.0,
            y: -height / 2.0,
            label: None,
        })
    }

    /// Sets the image source reference, a path or URL the output format can
    /// resolve (builder style).
    pub fn with_source(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
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

    /// Places the image box explicitly (builder style).
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

impl Layer for ImageBox {
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
        let origin = Point::new(self.x, self.y);
        let size = Size::new(self.width, self.height);
        let mut collection = Collection::new();

        match &self.href {
            Some(href) => {
                collection.push(Primitive::Image {
                    origin,
                    size,
                    href: href.clone(),
                });
                collection.push(Primitive::Rect { origin, size });
            }
            None => {
                // Placeholder: frame with a diagonal cross
                collection.push(Primitive::Rect { origin, size });
                collection.push(Primitive::Lines {
                    segments: vec![
                        vec![
                            Point::new(self.x, self.y),
                            Point::new(self.x + self.width, self.y + self.height),
                        ],
                        vec![
                            Point::new(self.x, self.y + self.height),
                            Point::new(self.x + self.width, self.y),
                        ],
                    ],
                });
            }
        }

        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}
