//! SVG drawing surface.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{self as svg_element, Group},
};

use crate::{
    color::Color,
    draw::{Collection, PlacedLabel, Primitive, VerticalAlign},
    export::{Error, Surface},
    geometry::Bounds,
    layout::Scene,
};

const FONT_FAMILY: &str = "Arial";
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Renders scenes to SVG documents.
///
/// `draw` builds an in-memory [`Document`]; `display` writes it to the
/// configured file. Between the two, the caller may inspect the document,
/// grab it as a string, or add custom SVG nodes on top of the diagram.
pub struct SvgCanvas {
    file_name: String,
    background: Option<Color>,
    document: Option<Document>,
}

impl SvgCanvas {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            background: None,
            document: None,
        }
    }

    /// Sets a background color, overriding the scene's configured one
    /// (builder style).
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Returns the drawn document, if `draw` has run.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Returns the drawn document serialized to a string.
    pub fn to_svg_string(&self) -> Option<String> {
        self.document.as_ref().map(|document| document.to_string())
    }

    /// Adds a custom node on top of the drawn diagram.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if nothing has been drawn yet.
    pub fn add<N>(&mut self, node: N) -> Result<(), Error>
    where
        N: svg::Node,
    {
        match self.document.take() {
            Some(document) => {
                self.document = Some(document.add(node));
                Ok(())
            }
            None => Err(Error::Render(
                "cannot add to an empty canvas, draw a scene first".to_string(),
            )),
        }
    }

    /// Writes an SVG document to the configured file.
    fn write_document(&self, document: &Document) -> Result<(), Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let file = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(&file, "{document}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }

    fn render_collection(&self, collection: &Collection, bounds: Bounds) -> Group {
        let stroke = collection.stroke();
        let mut group = Group::new()
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());
        if let Some(dasharray) = stroke.style().to_svg_value() {
            group = group.set("stroke-dasharray", dasharray);
        }

        for (primitive, fill) in collection.items() {
            group = group.add(render_primitive(primitive, fill, bounds));
        }
        group
    }

    fn render_label(&self, label: &PlacedLabel, bounds: Bounds) -> svg_element::Text {
        let x = to_canvas_x(bounds, label.anchor().x());
        let y = to_canvas_y(bounds, label.anchor().y());
        let line_height = f32::from(label.font_size()) * LINE_HEIGHT_FACTOR;
        let lines: Vec<&str> = label.lines().collect();

        let mut text = svg_element::Text::new("")
            .set("x", x)
            .set("y", y)
            .set("text-anchor", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", label.font_size())
            .set("fill", "black")
            .set("stroke", "none");

        // Anchor the text block: hanging baseline flows the lines downward
        // from the anchor, the default baseline stacks them upward above it
        let first_dy = match label.align() {
            VerticalAlign::Top => {
                text = text.set("dominant-baseline", "hanging");
                0.0
            }
            VerticalAlign::Bottom => -((lines.len() - 1) as f32) * line_height,
        };

        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { first_dy } else { line_height };
            text = text.add(svg_element::TSpan::new(*line).set("x", x).set("dy", dy));
        }
        text
    }
}

impl Surface for SvgCanvas {
    fn draw(&mut self, scene: &Scene) -> Result<(), Error> {
        let bounds = scene.bounds();
        let size = bounds.to_size();

        let mut document = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        if let Some(background) = self.background.or_else(|| scene.background()) {
            document = document.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", background.to_string()),
            );
        }

        for collection in scene.collections() {
            if collection.is_empty() {
                continue;
            }
            document = document.add(self.render_collection(collection, bounds));
        }

        for label in scene.labels() {
            document = document.add(self.render_label(label, bounds));
        }

        debug!(
            collections = scene.collections().len(),
            labels = scene.labels().len();
            "SVG document rendered",
        );

        self.document = Some(document);
        Ok(())
    }

    fn display(&mut self) -> Result<(), Error> {
        match &self.document {
            Some(document) => self.write_document(document),
            None => Err(Error::Render(
                "nothing to display, draw a scene first".to_string(),
            )),
        }
    }
}

/// Maps a world x-coordinate into the canvas frame.
fn to_canvas_x(bounds: Bounds, x: f32) -> f32 {
    x - bounds.min_x()
}

/// Maps a world y-coordinate into the canvas frame, flipping y-up to y-down.
fn to_canvas_y(bounds: Bounds, y: f32) -> f32 {
    bounds.max_y() - y
}

fn fill_value(fill: Option<&Color>) -> String {
    match fill {
        Some(color) => color.to_string(),
        None => "none".to_string(),
    }
}

fn render_primitive(
    primitive: &Primitive,
    fill: Option<&Color>,
    bounds: Bounds,
) -> Box<dyn svg::Node> {
    match primitive {
        Primitive::Rect { origin, size } => Box::new(
            svg_element::Rectangle::new()
                .set("x", to_canvas_x(bounds, origin.x()))
                .set("y", to_canvas_y(bounds, origin.y() + size.height()))
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", fill_value(fill)),
        ),
        Primitive::Circle { center, radius } => Box::new(
            svg_element::Circle::new()
                .set("cx", to_canvas_x(bounds, center.x()))
                .set("cy", to_canvas_y(bounds, center.y()))
                .set("r", *radius)
                .set("fill", fill_value(fill)),
        ),
        Primitive::Polygon { points } => {
            let point_list = points
                .iter()
                .map(|point| {
                    format!(
                        "{},{}",
                        to_canvas_x(bounds, point.x()),
                        to_canvas_y(bounds, point.y())
                    )
                })
                .collect::<Vec<_>>()
                .join(" ");
            Box::new(
                svg_element::Polygon::new()
                    .set("points", point_list)
                    .set("fill", fill_value(fill)),
            )
        }
        Primitive::Lines { segments } => {
            let data = segments
                .iter()
                .filter(|segment| segment.len() >= 2)
                .map(|segment| {
                    let mut path = format!(
                        "M {} {}",
                        to_canvas_x(bounds, segment[0].x()),
                        to_canvas_y(bounds, segment[0].y())
                    );
                    for point in &segment[1..] {
                        path.push_str(&format!(
                            " L {} {}",
                            to_canvas_x(bounds, point.x()),
                            to_canvas_y(bounds, point.y())
                        ));
                    }
                    path
                })
                .collect::<Vec<_>>()
                .join(" ");
            Box::new(
                svg_element::Path::new()
                    .set("d", data)
                    .set("fill", fill_value(fill)),
            )
        }
        Primitive::Image { origin, size, href } => Box::new(
            svg_element::Image::new()
                .set("x", to_canvas_x(bounds, origin.x()))
                .set("y", to_canvas_y(bounds, origin.y() + size.height()))
                .set("width", size.width())
                .set("height", size.height())
                .set("href", href.as_str()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        draw::StrokeDefinition,
        geometry::{Point, Size},
    };

    fn unit_bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_coordinate_flip() {
        let bounds = Bounds::new(-50.0, -50.0, 50.0, 50.0);
        assert_eq!(to_canvas_x(bounds, -50.0), 0.0);
        assert_eq!(to_canvas_x(bounds, 50.0), 100.0);
        // y-up world top maps to canvas 0
        assert_eq!(to_canvas_y(bounds, 50.0), 0.0);
        assert_eq!(to_canvas_y(bounds, -50.0), 100.0);
    }

    #[test]
    fn test_draw_produces_document() {
        let mut collection = Collection::with_stroke(StrokeDefinition::default());
        collection.push_filled(
            Primitive::Rect {
                origin: Point::new(10.0, 10.0),
                size: Size::new(20.0, 20.0),
            },
            Color::new("red").unwrap(),
        );
        let scene = Scene::new(vec![collection], Vec::new(), unit_bounds(), None);

        let mut canvas = SvgCanvas::new("unused.svg");
        canvas.draw(&scene).unwrap();

        let output = canvas.to_svg_string().unwrap();
        assert!(output.contains("<svg"));
        assert!(output.contains("<rect"));
        // Rect top edge: world y 30 maps to canvas y 70
        assert!(output.contains("y=\"70\""));
    }

    #[test]
    fn test_display_without_draw_is_an_error() {
        let mut canvas = SvgCanvas::new("unused.svg");
        assert!(matches!(canvas.display(), Err(Error::Render(_))));
    }

    #[test]
    fn test_add_custom_node_after_draw() {
        let scene = Scene::new(Vec::new(), Vec::new(), unit_bounds(), None);
        let mut canvas = SvgCanvas::new("unused.svg");

        assert!(canvas.add(svg_element::Circle::new()).is_err());

        canvas.draw(&scene).unwrap();
        canvas
            .add(svg_element::Circle::new().set("r", 5.0))
            .unwrap();
        assert!(canvas.to_svg_string().unwrap().contains("<circle"));
    }

    #[test]
    fn test_background_rect() {
        let scene = Scene::new(
            Vec::new(),
            Vec::new(),
            unit_bounds(),
            Some(Color::new("white").unwrap()),
        );
        let mut canvas = SvgCanvas::new("unused.svg");
        canvas.draw(&scene).unwrap();
        assert!(canvas.to_svg_string().unwrap().contains("fill=\"white\""));
    }
}
