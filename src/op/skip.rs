use crate::{
    draw::{Collection, Label, LabelLocation, Primitive, StrokeDefinition},
    geometry::Point,
    layer::Layer,
    op::Operation,
};

/// A skip connection routed below the diagram: down from the source layer's
/// bottom, across, and up into the target layer's bottom, with an upward
/// arrowhead and junction dots at both ends.
///
/// Meant for the free-form renderer, where the endpoints need not be
/// adjacent; stack several with increasing `drop` values to keep parallel
/// skips from overlapping.
#[derive(Debug, Clone)]
pub struct Skip {
    drop: f32,
    arrow_size: f32,
    dot_radius: f32,
    stroke: StrokeDefinition,
    label: Option<Label>,
}

impl Skip {
    pub fn new() -> Self {
        Self {
            drop: 40.0,
            arrow_size: 3.0,
            dot_radius: 2.0,
            stroke: StrokeDefinition::default(),
            label: None,
        }
    }

    /// Sets how far below the lower of the two layers the horizontal run is
    /// routed (builder style).
    pub fn with_drop(mut self, drop: f32) -> Self {
        self.drop = drop;
        self
    }

    /// Sets the arrowhead size (builder style).
    pub fn with_arrow_size(mut self, size: f32) -> Self {
        self.arrow_size = size;
        self
    }

    /// Sets the junction dot radius (builder style).
    pub fn with_dot_radius(mut self, radius: f32) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Sets the stroke definition (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label, placed below the run (builder style).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(Label::new(text).with_location(LabelLocation::Below));
        self
    }
}

impl Default for Skip {
    fn default() -> Self {
        Self::new()
    }
}

impl Operation for Skip {
    fn collect(&self, a: &dyn Layer, b: &dyn Layer) -> Collection {
        let start = a.corners().bottom_left().midpoint(a.corners().bottom_right());
        let end = b.corners().bottom_left().midpoint(b.corners().bottom_right());
        let route_y = a.bounds().min_y().min(b.bounds().min_y()) - self.drop;

        let mut collection = Collection::with_stroke(self.stroke.clone());
        collection.push(Primitive::Lines {
            segments: vec![
                vec![
                    start,
                    Point::new(start.x(), route_y),
                    Point::new(end.x(), route_y),
                    Point::new(end.x(), end.y() - self.arrow_size),
                ],
                // Upward arrowhead under the target layer
                vec![
                    Point::new(end.x() - self.arrow_size, end.y() - self.arrow_size),
                    end,
                    Point::new(end.x() + self.arrow_size, end.y() - self.arrow_size),
                    Point::new(end.x() - self.arrow_size, end.y() - self.arrow_size),
                ],
            ],
        });
        collection.push_filled(
            Primitive::Circle {
                center: start,
                radius: self.dot_radius,
            },
            self.stroke.color(),
        );

        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Block;

    #[test]
    fn test_skip_routes_below_both_layers() {
        let a = Block::new(40.0, 40.0).unwrap().at(0.0, -20.0);
        let b = Block::new(40.0, 60.0).unwrap().at(200.0, -30.0);

        let skip = Skip::new().with_drop(25.0);
        let collection = skip.collect(&a, &b);

        let (primitive, _) = collection.items().next().unwrap();
        match primitive {
            Primitive::Lines { segments } => {
                // Horizontal run 25 below the deeper layer (B, bottom -30)
                assert_eq!(segments[0][1].y(), -55.0);
                assert_eq!(segments[0][2].y(), -55.0);
                // Starts under A's bottom center
                assert_eq!(segments[0][0], Point::new(20.0, -20.0));
            }
            other => panic!("expected lines, got {other:?}"),
        }

        // Junction dot at the source
        assert!(
            collection
                .items()
                .any(|(p, _)| matches!(p, Primitive::Circle { .. }))
        );
    }
}
