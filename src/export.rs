//! Drawing-surface boundary.
//!
//! The renderers hand a finished [`Scene`](crate::layout::Scene) to a
//! [`Surface`] and never deal with an output format themselves. The crate
//! ships one surface, the SVG canvas in [`svg`]; anything that can draw the
//! primitive collections of a scene can stand in for it.

pub mod svg;

use thiserror::Error;

use crate::layout::Scene;

#[derive(Debug, Error)]
pub enum Error {
    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A drawing surface accepting geometric primitives.
pub trait Surface {
    /// Converts a scene into the surface's output representation.
    fn draw(&mut self, scene: &Scene) -> Result<(), Error>;

    /// Performs the surface's display action: writing the output file,
    /// showing a window, whatever displaying means for this surface.
    fn display(&mut self) -> Result<(), Error>;
}
