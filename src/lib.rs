//! Strata - compose and render neural-network architecture diagrams.
//!
//! Diagrams are scripted rather than drawn: the caller builds [`layer`]
//! objects (blocks, feature-map stacks, neuron columns), connects them with
//! [`op`] objects (arrows, dense fans, convolution glyphs), and hands both
//! to a renderer. The renderer assigns positions, asks every element for its
//! drawable primitives, and passes the assembled scene to a drawing surface
//! such as the bundled SVG canvas.
//!
//! Two layout strategies are available:
//!
//! - [`SequentialRenderer`] places layers left to right in insertion order
//!   and auto-connects adjacent layers, covering the common feed-forward
//!   stack with zero configuration.
//! - [`FreeformRenderer`] keys layers by id and leaves placement to the
//!   caller, which allows skip connections and arbitrary topologies; only
//!   vertical centering is inferred.
//!
//! # Example
//!
//! ```no_run
//! use strata::{
//!     SequentialRenderer, StrataError,
//!     export::svg::SvgCanvas,
//!     layer::{Block, FeatureMaps, NeuronColumn},
//!     op::{Arrow, Conv, Dense},
//! };
//!
//! fn main() -> Result<(), StrataError> {
//!     let mut renderer = SequentialRenderer::new();
//!
//!     renderer.add_layer(FeatureMaps::new(3, 100.0, 100.0)?.with_label("Input"));
//!     renderer.add_operation(Conv::new((8.0, 8.0), 2).with_label("Conv2d"));
//!     renderer.add_layer(FeatureMaps::new(16, 50.0, 50.0)?.with_label("Features"));
//!     renderer.add_operation(Arrow::new().with_label("Flatten"));
//!     renderer.add_layer(NeuronColumn::new(10, 12.0)?.with_label("Dense"));
//!     renderer.add_operation(Dense::new(10, 4));
//!     renderer.add_layer(Block::new(40.0, 60.0)?.with_label("Output"));
//!
//!     let mut canvas = SvgCanvas::new("network.svg");
//!     renderer.render(&mut canvas, true)?;
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod config;
pub mod draw;
pub mod export;
pub mod geometry;
pub mod layer;
pub mod layout;
pub mod op;

mod error;

pub use config::RenderOptions;
pub use error::StrataError;
pub use layout::{FreeformRenderer, Scene, SequentialRenderer};
