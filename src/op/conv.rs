use log::warn;

use crate::{
    color::Color,
    draw::{Collection, Label, LabelLocation, Primitive, StrokeDefinition},
    geometry::{Point, Size},
    layer::Layer,
    op::Operation,
};

/// A kernel-projection glyph: a kernel square drawn near the source layer's
/// bottom-right, a unit target cell near the target layer's top-left, and
/// projection lines joining their corners.
#[derive(Debug, Clone)]
pub struct Conv {
    kernel: (f32, f32),
    stride: u32,
    kernel_fill: Color,
    stroke: StrokeDefinition,
    label: Option<Label>,
}

impl Conv {
    /// Creates a convolution glyph for the given kernel size and stride.
    ///
    /// A kernel larger than the source layer's base shape is clamped at
    /// collection time with a warning rather than failing.
    pub fn new(kernel: (f32, f32), stride: u32) -> Self {
        Self {
            kernel,
            stride,
            kernel_fill: Color::new("#1a1a1a").unwrap(),
            stroke: StrokeDefinition::default(),
            label: None,
        }
    }

    /// Sets the kernel fill color (builder style).
    pub fn with_kernel_fill(mut self, fill: Color) -> Self {
        self.kernel_fill = fill;
        self
    }

    /// Sets the stroke definition for the projection lines (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label, composed with the kernel statistics and placed below
    /// the glyph (builder style).
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.label = Some(
            Label::new(format!(
                "{}\n{}x{} Kernel\nStride {}",
                name.into(),
                self.kernel.0,
                self.kernel.1,
                self.stride
            ))
            .with_location(LabelLocation::Below),
        );
        self
    }

    /// Kernel dimensions, clamped to the source layer's base shape.
    fn clamped_kernel(&self, a: &dyn Layer) -> (f32, f32) {
        let base = a.base_size();
        let (kw, kh) = self.kernel;
        if kw > base.width() || kh > base.height() {
            warn!(
                kernel_width = kw,
                kernel_height = kh,
                layer_width = base.width(),
                layer_height = base.height();
                "Kernel exceeds the source layer's base shape, clamping",
            );
        }
        (kw.min(base.width()), kh.min(base.height()))
    }

    /// Bottom-left corners of the kernel square and the unit target cell.
    fn placements(&self, a: &dyn Layer, b: &dyn Layer) -> (Point, Point, (f32, f32)) {
        let (kw, kh) = self.clamped_kernel(a);

        let a_base = a.base_size();
        let a_corner = a.corners().bottom_right();
        let kernel_origin = Point::new(
            a_corner.x() - a_base.width().min(0.1 * a_base.width() + kw),
            a_corner.y() + (a_base.height() - kh).min(0.1 * a_base.height()),
        );

        let b_base = b.base_size();
        let b_corner = b.corners().bottom_right();
        let target_origin = Point::new(
            b_corner.x() - 0.9 * b_base.width(),
            b_corner.y() + 0.9 * b_base.height() - 1.0,
        );

        (kernel_origin, target_origin, (kw, kh))
    }
}

impl Operation for Conv {
    fn collect(&self, a: &dyn Layer, b: &dyn Layer) -> Collection {
        let (kernel_origin, target_origin, (kw, kh)) = self.placements(a, b);

        let mut collection = Collection::with_stroke(self.stroke.clone());
        collection.push_filled(
            Primitive::Rect {
                origin: kernel_origin,
                size: Size::new(kw, kh),
            },
            self.kernel_fill,
        );
        collection.push_filled(
            Primitive::Rect {
                origin: target_origin,
                size: Size::new(1.0, 1.0),
            },
            self.kernel_fill,
        );

        // Projection lines from the kernel's right corners to the cell's
        // left corners
        collection.push(Primitive::Lines {
            segments: vec![
                vec![
                    Point::new(kernel_origin.x() + kw, kernel_origin.y() + kh),
                    Point::new(target_origin.x(), target_origin.y() + 1.0),
                ],
                vec![
                    Point::new(kernel_origin.x() + kw, kernel_origin.y()),
                    Point::new(target_origin.x(), target_origin.y()),
                ],
            ],
        });

        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    fn label_anchor_x(&self, a: &dyn Layer, b: &dyn Layer) -> f32 {
        let (kernel_origin, target_origin, (kw, _)) = self.placements(a, b);
        (kernel_origin.x() + kw + target_origin.x()) / 2.0
    }
}
