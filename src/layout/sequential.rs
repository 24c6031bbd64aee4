use log::{debug, info, warn};

use crate::{
    config::RenderOptions,
    error::StrataError,
    export::Surface,
    layer::Layer,
    layout::{Scene, content_bounds, place_layer_label, place_operation_label},
    op::Operation,
};

/// Lays out layers left to right in insertion order and connects adjacent
/// pairs with the operations list, matched by index.
///
/// This zero-configuration default covers the common feed-forward stack:
/// operation `i` connects layers `i` and `i + 1`. Supplying fewer operations
/// than adjacent pairs leaves the trailing pairs unconnected; supplying more
/// logs a warning and ignores the excess.
///
/// # Examples
///
/// ```
/// use strata::{SequentialRenderer, layer::Block, op::Arrow};
///
/// let mut renderer = SequentialRenderer::new();
/// renderer.add_layer(Block::new(50.0, 50.0)?.with_label("In"));
/// renderer.add_operation(Arrow::new().with_label("fc"));
/// renderer.add_layer(Block::new(50.0, 80.0)?.with_label("Out"));
///
/// let scene = renderer.scene()?;
/// assert_eq!(scene.collections().len(), 3);
/// # Ok::<(), strata::StrataError>(())
/// ```
#[derive(Debug, Default)]
pub struct SequentialRenderer {
    layers: Vec<Box<dyn Layer>>,
    operations: Vec<Box<dyn Operation>>,
    options: RenderOptions,
    manual_x: Option<Vec<f32>>,
}

impl SequentialRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Appends a layer; its position is assigned at render time.
    pub fn add_layer(&mut self, layer: impl Layer + 'static) {
        self.layers.push(Box::new(layer));
    }

    /// Appends an operation connecting the next adjacent layer pair.
    pub fn add_operation(&mut self, operation: impl Operation + 'static) {
        self.operations.push(Box::new(operation));
    }

    /// Returns the number of layers added so far.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the number of operations added so far.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Overrides the automatic spacing with explicit x positions, one per
    /// layer. All-or-nothing: the list length is checked at render time.
    pub fn set_positions(&mut self, positions: Vec<f32>) {
        self.manual_x = Some(positions);
    }

    /// Assembles the scene: assigns positions, collects primitives, and
    /// places labels.
    pub fn scene(&mut self) -> Result<Scene, StrataError> {
        if self.layers.is_empty() {
            warn!("Rendering a sequential diagram with no layers");
            return Ok(Scene::default());
        }

        let pairs = self.layers.len() - 1;
        if self.operations.len() > pairs {
            warn!(
                operations = self.operations.len(),
                pairs = pairs;
                "More operations than adjacent layer pairs, excess ignored",
            );
        }
        let connected = self.operations.len().min(pairs);

        self.assign_positions()?;

        let mut collections = Vec::with_capacity(self.layers.len() + connected);
        for layer in &self.layers {
            collections.push(layer.collect());
        }
        for (i, operation) in self.operations.iter().take(connected).enumerate() {
            collections.push(operation.collect(self.layers[i].as_ref(), self.layers[i + 1].as_ref()));
        }

        let bounds = content_bounds(self.layers.iter().map(|layer| layer.as_ref()));
        let limits = bounds.expand_fractional(self.options.x_margin(), self.options.y_margin());

        let mut labels = Vec::new();
        for layer in &self.layers {
            labels.extend(place_layer_label(layer.as_ref(), limits, &self.options));
        }
        for (i, operation) in self.operations.iter().take(connected).enumerate() {
            labels.extend(place_operation_label(
                operation.as_ref(),
                self.layers[i].as_ref(),
                self.layers[i + 1].as_ref(),
                limits,
                &self.options,
            ));
        }

        debug!(
            collections = collections.len(),
            labels = labels.len();
            "Sequential scene assembled",
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
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        auto_display: bool,
    ) -> Result<(), StrataError> {
        info!(
            layers = self.layers.len(),
            operations = self.operations.len();
            "Rendering sequential diagram",
        );

        let scene = self.scene()?;
        surface.draw(&scene)?;

        if auto_display {
            surface.display()?;
        }
        Ok(())
    }

    fn assign_positions(&mut self) -> Result<(), StrataError> {
        if let Some(positions) = &self.manual_x {
            if positions.len() != self.layers.len() {
                return Err(StrataError::Layout(format!(
                    "{} manual positions given for {} layers",
                    positions.len(),
                    self.layers.len()
                )));
            }
            for (layer, &x) in self.layers.iter_mut().zip(positions) {
                layer.set_x(x);
            }
            return Ok(());
        }

        self.assign_auto_positions();
        Ok(())
    }

    /// Accumulates x positions left to right: each layer clears the previous
    /// one by the horizontal gap, widened for narrow layers, while slanted
    /// stacks additionally keep the diagonal clearance.
    fn assign_auto_positions(&mut self) {
        let hspace = self.options.horizontal_spacing();
        let dspace = self.options.diagonal_spacing();

        let mut x = 0.0;
        let mut diagonal_base = 0.0;
        let mut last_right = 0.0;

        for (i, layer) in self.layers.iter_mut().enumerate() {
            let extent = layer.extent();
            let base = layer.base_size();
            let y = layer.position().y();

            if i > 0 {
                x = dspace + diagonal_base - y;
            }

            if x > last_right || x + extent.width() < last_right {
                x = last_right
                    + if extent.width() < hspace {
                        hspace * 1.5
                    } else {
                        hspace
                    };
            }

            diagonal_base = x + base.width() + y + base.height();
            last_right = x + extent.width();
            layer.set_x(x);
        }
    }
}
