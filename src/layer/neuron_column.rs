use log::warn;

use crate::{
    color::Color,
    draw::{Collection, Label, LabelLocation, Primitive},
    error::StrataError,
    geometry::{Corners, Point, Size},
    layer::{DisplayLimit, Layer, default_fill, ensure_positive, placeholder_fill},
};

/// A vertical column of circles, one per feature/neuron.
///
/// The column grows downward from the base circle. Large feature counts can
/// be limited for display with placeholder dots standing in for the elided
/// middle.
#[derive(Debug, Clone)]
pub struct NeuronColumn {
    features: usize,
    diameter: f32,
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

impl NeuronColumn {
    /// Creates a column of `features` circles of the given diameter,
    /// vertically centered about the baseline until positioned.
    pub fn new(features: usize, diameter: f32) -> Result<Self, StrataError> {
        if features == 0 {
            return Err(StrataError::InvalidGeometry(
                "neuron column needs at least one feature".to_string(),
            ));
        }
        ensure_positive(diameter, "neuron diameter")?;

        let mut column = Self {
            features,
            diameter,
            gap: 0.0,
            limited: 0,
            ends: 5,
            skip: 1,
            placeholder_radius: diameter / 4.0,
            fill: default_fill(),
            x: 0.0,
            y: 0.0,
            label: None,
        };
        column.y = column.extent().height() / 2.0 - diameter;
        Ok(column)
    }

    /// Sets the vertical gap between circles (builder style).
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self.y = self.extent().height() / 2.0 - self.diameter;
        self
    }

    /// Limits the drawn circles to `shown` slots with `ends` full circles at
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
        self.y = self.extent().height() / 2.0 - self.diameter;
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
        self.diameter + self.gap
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

    fn slot_center(&self, slot: usize) -> Point {
        let radius = self.diameter / 2.0;
        Point::new(
            self.x + radius,
            self.y - self.pitch() * slot as f32 + radius,
        )
    }
}

impl Layer for NeuronColumn {
    fn corners(&self) -> Corners {
        let top = self.y + self.diameter;
        let extent = self.extent();
        Corners::new(
            Point::new(self.x, top),
            Point::new(self.x + self.diameter, top),
            Point::new(self.x, top - extent.height()),
            Point::new(self.x + self.diameter, top - extent.height()),
        )
    }

    fn extent(&self) -> Size {
        Size::new(
            self.diameter,
            self.pitch() * self.drawn() as f32 - self.gap,
        )
    }

    fn base_size(&self) -> Size {
        Size::new(self.diameter, self.diameter)
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
        let radius = self.diameter / 2.0;

        match self.limit() {
            Some(limit) => {
                for i in 0..limit.ends {
                    collection.push_filled(
                        Primitive::Circle {
                            center: self.slot_center(i),
                            radius,
                        },
                        self.fill,
                    );
                }

                for i in 0..limit.interior() {
                    if i % limit.skip == 0 {
                        collection.push_filled(
                            Primitive::Circle {
                                center: self.slot_center(i + limit.ends),
                                radius: limit.placeholder_radius,
                            },
                            placeholder_fill(),
                        );
                    }
                }

                let offset = limit.ends + limit.interior();
                for i in 0..limit.ends {
                    collection.push_filled(
                        Primitive::Circle {
                            center: self.slot_center(i + offset),
                            radius,
                        },
                        self.fill,
                    );
                }
            }
            None => {
                for i in 0..self.features {
                    collection.push_filled(
                        Primitive::Circle {
                            center: self.slot_center(i),
                            radius,
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
    fn test_neuron_column_rejects_degenerate_input() {
        assert!(NeuronColumn::new(0, 10.0).is_err());
        assert!(NeuronColumn::new(5, 0.0).is_err());
    }

    #[test]
    fn test_neuron_column_extent_and_centering() {
        let column = NeuronColumn::new(4, 10.0).unwrap().with_gap(2.0);
        // 4 circles at pitch 12 minus the trailing gap
        assert_eq!(column.extent(), Size::new(10.0, 46.0));
        assert_eq!(column.position().y(), 13.0);

        let bounds = column.bounds();
        assert_eq!(bounds.max_y(), 23.0);
        assert_eq!(bounds.min_y(), -23.0);
    }

    #[test]
    fn test_neuron_column_draws_one_circle_per_feature() {
        let column = NeuronColumn::new(7, 8.0).unwrap();
        assert_eq!(column.collect().len(), 7);
    }

    #[test]
    fn test_neuron_column_limited_display() {
        let column = NeuronColumn::new(100, 8.0)
            .unwrap()
            .with_limited(14, 5)
            .with_skip_interval(2);
        // 10 end circles + dots at interior slots 0 and 2 of 4
        assert_eq!(column.collect().len(), 12);
    }

    #[test]
    fn test_neuron_column_slot_spacing() {
        let column = NeuronColumn::new(3, 10.0).unwrap().with_gap(5.0);
        assert_eq!(column.slot_spacing(), Some(15.0));
    }
}
