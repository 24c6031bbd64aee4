use log::warn;

use crate::{
    color::Color,
    draw::{Collection, Label, LabelLocation, Primitive},
    error::StrataError,
    geometry::{Corners, Point, Size},
    layer::{DisplayLimit, Layer, default_fill, ensure_positive, placeholder_fill},
};

/// A vertical column of rectangles, one per feature.
///
/// The rectangular sibling of [`NeuronColumn`](crate::layer::NeuronColumn),
/// with the same downward growth and display limiting.
#[derive(Debug, Clone)]
pub struct CellColumn {
    features: usize,
    width: f32,
    height: f32,
    gap: f32,
    limited: usize,
    ends: usize,
    skip: usize,
    placeholder_radius: f32,
    fill: Color,
    x: f32,
    y: f32,
    label: Option<Label>,
}

impl CellColumn {
    /// Creates a column of `features` cells of the given size, vertically
    /// centered about the baseline until positioned.
    pub fn new(features: usize, width: f32, height: f32) -> Result<Self, StrataError> {
        if features == 0 {
            return Err(StrataError::InvalidGeometry(
                "cell column needs at least one feature".to_string(),
            ));
        }
        ensure_positive(width, "cell width")?;
        ensure_positive(height, "cell height")?;

        let mut column = Self {
            features,
            width,
            height,
            gap: 0.0,
            limited: 0,
            ends: 5,
            skip: 1,
            placeholder_radius: height / 2.0,
            fill: default_fill(),
            x: 0.0,
            y: 0.0,
            label: None,
        };
        column.y = column.extent().height() / 2.0 - height;
        Ok(column)
    }

    /// Sets the vertical gap between cells (builder style).
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self.y = self.extent().height() / 2.0 - self.height;
        self
    }

    /// Limits the drawn cells to `shown` slots with `ends` full cells at
    /// each end (builder style).
    pub fn with_limited(mut self, shown: usize, ends: usize) -> Self {
        if shown >= self.features {
            warn!(
                shown = shown,
                features = self.features;
                "Display limit must be below the feature count, ignoring",
            );
            return self;
        }
        self.limited = shown;
        self.ends = ends;
        self.y = self.extent().height() / 2.0 - self.height;
        self
    }

    /// Sets the interval between placeholder dots (builder style).
    pub fn with_skip_interval(mut self, skip: usize) -> Self {
        self.skip = skip.max(1);
        self
    }

    /// Sets the placeholder dot radius (builder style).
    pub fn with_placeholder_radius(mut self, radius: f32) -> Self {
        self.placeholder_radius = radius.max(0.0);
        self
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the label, composed with the feature count (builder style).
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.label = Some(Label::new(format!("{}\n{}", name.into(), self.features)));
        self
    }

    /// Sets which side the label is placed on (builder style).
    pub fn with_label_location(mut self, location: LabelLocation) -> Self {
        if let Some(label) = self.label.take() {
            self.label = Some(label.with_location(location));
        }
        self
    }

    /// Places the column explicitly (builder style).
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    fn pitch(&self) -> f32 {
        self.height + self.gap
    }

    fn drawn(&self) -> usize {
        if self.limited > 0 {
            self.limited
        } else {
            self.features
        }
    }

    fn limit(&self) -> Option<DisplayLimit> {
        (self.limited > 0).then(|| {
            DisplayLimit::new(self.limited, self.ends, self.skip, self.placeholder_radius)
        })
    }

    fn cell_origin(&self, slot: usize) -> Point {
        Point::new(self.x, self.y - self.pitch() * slot as f32)
    }
}

impl Layer for CellColumn {
    fn corners(&self) -> Corners {
        let top = self.y + self.height;
        let extent = self.extent();
        Corners::new(
            Point::new(self.x, top),
            Point::new(self.x + self.width, top),
            Point::new(self.x, top - extent.height()),
            Point::new(self.x + self.width, top - extent.height()),
        )
    }

    fn extent(&self) -> Size {
        Size::new(self.width, self.pitch() * self.drawn() as f32 - self.gap)
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
        let size = Size::new(self.width, self.height);

        match self.limit() {
            Some(limit) => {
                for i in 0..limit.ends {
                    collection.push_filled(
                        Primitive::Rect {
                            origin: self.cell_origin(i),
                            size,
                        },
                        self.fill,
                    );
                }

                for i in 0..limit.interior() {
                    if i % limit.skip == 0 {
                        let origin = self.cell_origin(i + limit.ends);
                        collection.push_filled(
                            Primitive::Circle {
                                center: Point::new(
                                    origin.x() + self.width / 2.0,
                                    origin.y() + limit.placeholder_radius / 2.0
                                        + self.height / 2.0,
                                ),
                                radius: limit.placeholder_radius,
                            },
                            placeholder_fill(),
                        );
                    }
                }

                let offset = limit.ends + limit.interior();
                for i in 0..limit.ends {
                    collection.push_filled(
                        Primitive::Rect {
                            origin: self.cell_origin(i + offset),
                            size,
                        },
                        self.fill,
                    );
                }
            }
            None => {
                for i in 0..self.features {
                    collection.push_filled(
                        Primitive::Rect {
                            origin: self.cell_origin(i),
                            size,
                        },
                        self.fill,
                    );
                }
            }
        }

        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    fn slot_spacing(&self) -> Option<f32> {
        Some(self.pitch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_column_rejects_degenerate_input() {
        assert!(CellColumn::new(0, 10.0, 10.0).is_err());
        assert!(CellColumn::new(4, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_cell_column_extent() {
        let column = CellColumn::new(4, 10.0, 10.0).unwrap();
        assert_eq!(column.extent(), Size::new(10.0, 40.0));
        // Centered: base cell bottom at 20 - 10
        assert_eq!(column.position().y(), 10.0);
    }

    #[test]
    fn test_cell_column_draws_one_rect_per_feature() {
        let column = CellColumn::new(6, 10.0, 4.0).unwrap();
        assert_eq!(column.collect().len(), 6);
    }

    #[test]
    fn test_cell_column_limited_display() {
        let column = CellColumn::new(50, 10.0, 4.0)
            .unwrap()
            .with_limited(12, 4)
            .with_skip_interval(2);
        let rects = column
            .collect()
            .items()
            .filter(|(p, _)| matches!(p, Primitive::Rect { .. }))
            .count();
        let dots = column
            .collect()
            .items()
            .filter(|(p, _)| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(rects, 8);
        assert_eq!(dots, 2);
    }

    #[test]
    fn test_cell_column_slot_spacing() {
        let column = CellColumn::new(3, 10.0, 4.0).unwrap().with_gap(1.0);
        assert_eq!(column.slot_spacing(), Some(5.0));
    }
}
