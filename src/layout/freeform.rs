use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::{
    config::RenderOptions,
    error::StrataError,
    export::Surface,
    geometry::Point,
    layer::Layer,
    layout::{Scene, content_bounds, place_layer_label, place_operation_label},
    op::Operation,
};

/// A layer map keyed by unique id, with operations referencing their
/// endpoints by id.
///
/// Placement is manual except for vertical centering: a layer added without
/// an explicit y keeps its extent centered about the baseline. Operations
/// may connect any two layers, adjacent or not, and every endpoint id is
/// validated before anything is drawn; an unknown id aborts the render with
/// [`StrataError::UnresolvedEndpoint`] so no partial diagram is emitted.
///
/// # Examples
///
/// ```
/// use strata::{FreeformRenderer, layer::Block, op::Arrow};
///
/// let mut renderer = FreeformRenderer::new();
/// renderer.add_layer_at("in", Block::new(50.0, 50.0)?, 0.0, None)?;
/// renderer.add_layer_at("out", Block::new(50.0, 50.0)?, 150.0, None)?;
/// renderer.add_operation(Arrow::new(), "in", "out");
///
/// let scene = renderer.scene()?;
/// assert_eq!(scene.collections().len(), 3);
/// # Ok::<(), strata::StrataError>(())
/// ```
#[derive(Debug, Default)]
pub struct FreeformRenderer {
    layers: IndexMap<String, Box<dyn Layer>>,
    connections: Vec<Connection>,
    options: RenderOptions,
}

#[derive(Debug)]
struct Connection {
    operation: Box<dyn Operation>,
    source: String,
    target: String,
}

impl FreeformRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Adds a layer under a unique id, keeping the position the layer
    /// already carries.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::DuplicateLayer`] if the id is already taken.
    pub fn add_layer(
        &mut self,
        id: impl Into<String>,
        layer: impl Layer + 'static,
    ) -> Result<(), StrataError> {
        let id = id.into();
        if self.layers.contains_key(&id) {
            return Err(StrataError::DuplicateLayer(id));
        }
        self.layers.insert(id, Box::new(layer));
        Ok(())
    }

    /// Adds a layer and places it: x is explicit, y `None` keeps the
    /// layer's automatic vertical centering.
    pub fn add_layer_at(
        &mut self,
        id: impl Into<String>,
        mut layer: impl Layer + 'static,
        x: f32,
        y: Option<f32>,
    ) -> Result<(), StrataError> {
        match y {
            Some(y) => layer.set_position(Point::new(x, y)),
            None => layer.set_x(x),
        }
        self.add_layer(id, layer)
    }

    /// Adds or overwrites a layer under the given id.
    pub fn replace_layer(&mut self, id: impl Into<String>, layer: impl Layer + 'static) {
        self.layers.insert(id.into(), Box::new(layer));
    }

    /// Removes and returns a layer, keeping the insertion order of the rest.
    pub fn remove_layer(&mut self, id: &str) -> Option<Box<dyn Layer>> {
        self.layers.shift_remove(id)
    }

    /// Returns a layer by id.
    pub fn layer(&self, id: &str) -> Option<&dyn Layer> {
        self.layers.get(id).map(|layer| layer.as_ref())
    }

    /// Adds an operation connecting the two referenced layers. The ids are
    /// validated at render time.
    pub fn add_operation(
        &mut self,
        operation: impl Operation + 'static,
        source: impl Into<String>,
        target: impl Into<String>,
    ) {
        self.connections.push(Connection {
            operation: Box::new(operation),
            source: source.into(),
            target: target.into(),
        });
    }

    /// Assembles the scene: validates every endpoint, collects primitives,
    /// and places labels.
    pub fn scene(&self) -> Result<Scene, StrataError> {
        // Validate all endpoints up front so a bad reference aborts before
        // anything is produced
        for connection in &self.connections {
            for id in [&connection.source, &connection.target] {
                if !self.layers.contains_key(id) {
                    return Err(StrataError::UnresolvedEndpoint(id.clone()));
                }
            }
        }

        if self.layers.is_empty() {
            warn!("Rendering a free-form diagram with no layers");
            return Ok(Scene::default());
        }

        let mut collections = Vec::with_capacity(self.layers.len() + self.connections.len());
        for layer in self.layers.values() {
            collections.push(layer.collect());
        }
        for connection in &self.connections {
            let (source, target) = self.endpoints(connection);
            collections.push(connection.operation.collect(source, target));
        }

        let bounds = content_bounds(self.layers.values().map(|layer| layer.as_ref()));
        let limits = bounds.expand_fractional(self.options.x_margin(), self.options.y_margin());

        let mut labels = Vec::new();
        for layer in self.layers.values() {
            labels.extend(place_layer_label(layer.as_ref(), limits, &self.options));
        }
        for connection in &self.connections {
            let (source, target) = self.endpoints(connection);
            labels.extend(place_operation_label(
                connection.operation.as_ref(),
                source,
                target,
                limits,
                &self.options,
            ));
        }

        debug!(
            collections = collections.len(),
            labels = labels.len();
            "Free-form scene assembled",
        );

        Ok(Scene::new(
            collections,
            labels,
            limits,
            self.options.background_color()?,
        ))
    }

    /// Assembles the scene and draws it on the surface. With `auto_display`
    /// the surface's display action runs immediately; without it the caller
    /// keeps the surface handle for further customization.
    pub fn render(&self, surface: &mut dyn Surface, auto_display: bool) -> Result<(), StrataError> {
        info!(
            layers = self.layers.len(),
            operations = self.connections.len();
            "Rendering free-form diagram",
        );

        let scene = self.scene()?;
        surface.draw(&scene)?;

        if auto_display {
            surface.display()?;
        }
        Ok(())
    }

    /// Looks up a connection's endpoint layers. Only called after
    /// validation.
    fn endpoints(&self, connection: &Connection) -> (&dyn Layer, &dyn Layer) {
        (
            self.layers[&connection.source].as_ref(),
            self.layers[&connection.target].as_ref(),
        )
    }
}
