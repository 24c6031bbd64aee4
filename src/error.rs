//! Error types for strata operations.
//!
//! This module provides the main error type [`StrataError`] which wraps the
//! error conditions that can occur while composing and rendering a diagram.
//!
//! Connection-count mismatches in the sequential renderer are a deliberate
//! exception: partial connection is valid artistic intent, so they degrade
//! with a warning instead of surfacing here.

use std::io;

use thiserror::Error;

/// The main error type for strata operations.
#[derive(Debug, Error)]
pub enum StrataError {
    /// A layer was constructed with degenerate dimensions (zero or negative
    /// width/height, an empty stack, a collapsed polygon).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An operation references a layer id that is not present in the
    /// free-form renderer.
    #[error("unresolved endpoint: no layer with id `{0}`")]
    UnresolvedEndpoint(String),

    /// A layer id was added twice to the free-form renderer.
    #[error("layer id `{0}` already exists, use replace_layer to overwrite")]
    DuplicateLayer(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for StrataError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
