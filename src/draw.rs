//! Drawable-primitive model.
//!
//! Layers and operations do not talk to the drawing surface directly; they
//! produce [`Collection`]s of geometric [`Primitive`]s which the surface
//! turns into output. This keeps the composition core free of any rendering
//! backend and makes primitive generation pure: collecting twice without
//! moving a layer yields identical geometry.

mod collection;
mod label;
mod stroke;

pub use collection::{Collection, Primitive};
pub use label::{Label, LabelLocation, PlacedLabel, VerticalAlign};
pub use stroke::{StrokeDefinition, StrokeStyle};
