use crate::{
    color::Color,
    draw::{Collection, Label, LabelLocation, Primitive},
    error::StrataError,
    geometry::{Corners, Point, Size},
    layer::{Layer, default_fill},
};

/// An arbitrary polygon layer.
///
/// Anchor exception: `(x, y)` is the polygon's center, and the supplied
/// coordinates are relative to it. The extent is the coordinate bounding box.
#[derive(Debug, Clone)]
pub struct PolyShape {
    coords: Vec<Point>,
    width: f32,
    height: f32,
    fill: Color,
    x: f32,
    y: f32,
    label: Option<Label>,
}

impl PolyShape {
    /// Creates a polygon from center-relative coordinates.
    ///
    /// Needs at least three points spanning a non-degenerate bounding box.
    pub fn new(coords: Vec<Point>) -> Result<Self, StrataError> {
        if coords.len() < 3 {
            return Err(StrataError::InvalidGeometry(format!(
                "polygon needs at least 3 points, got {}",
                coords.len()
            )));
        }

        let (width, height) = Self::coord_span(&coords);
        if width <= 0.0 || height <= 0.0 {
            return Err(StrataError::InvalidGeometry(
                "polygon points span a degenerate bounding box".to_string(),
            ));
        }

        Ok(Self {
            coords,
            width,
            height,
            fill: default_fill(),
            x: 0.0,
            y: 0.0,
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

    /// Sets which side the label is placed on (builder style).
    pub fn with_label_location(mut self, location: LabelLocation) -> Self {
        if let Some(label) = self.label.take() {
            self.label = Some(label.with_location(location));
        }
        self
    }

    /// Places the polygon center explicitly (builder style).
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    fn coord_span(coords: &[Point]) -> (f32, f32) {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for point in coords {
            min_x = min_x.min(point.x());
            max_x = max_x.max(point.x());
            min_y = min_y.min(point.y());
            max_y = max_y.max(point.y());
        }

        (max_x - min_x, max_y - min_y)
    }
}

impl Layer for PolyShape {
    fn corners(&self) -> Corners {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        Corners::new(
            Point::new(self.x - half_width, self.y + half_height),
            Point::new(self.x + half_width, self.y + half_height),
            Point::new(self.x - half_width, self.y - half_height),
            Point::new(self.x + half_width, self.y - half_height),
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
        let offset = Point::new(self.x, self.y);
        let mut collection = Collection::new();
        collection.push_filled(
            Primitive::Polygon {
                points: self
                    .coords
                    .iter()
                    .map(|point| point.add_point(offset))
                    .collect(),
            },
            self.fill,
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

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(-10.0, -10.0),
            Point::new(10.0, -10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_poly_shape_rejects_degenerate_input() {
        assert!(PolyShape::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_err());
        // Collinear horizontal points span zero height
        assert!(
            PolyShape::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
            ])
            .is_err()
        );
    }

    #[test]
    fn test_poly_shape_extent_from_coords() {
        let poly = PolyShape::new(triangle()).unwrap();
        assert_eq!(poly.extent(), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_poly_shape_center_anchored_corners() {
        let poly = PolyShape::new(triangle()).unwrap().at(100.0, 50.0);
        let corners = poly.corners();
        assert_eq!(corners.top_left(), Point::new(90.0, 60.0));
        assert_eq!(corners.bottom_right(), Point::new(110.0, 40.0));
    }

    #[test]
    fn test_poly_shape_translates_points() {
        let poly = PolyShape::new(triangle()).unwrap().at(5.0, 5.0);
        let collection = poly.collect();
        let (primitive, _) = collection.items().next().unwrap();
        match primitive {
            Primitive::Polygon { points } => {
                assert_eq!(points[0], Point::new(-5.0, -5.0));
                assert_eq!(points[2], Point::new(5.0, 15.0));
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
