//! Error types for table modelling and rendering.
//!
//! Rendering itself never fails: missing colors or attributes degrade to no
//! styling. Errors only come from configuring a table (bad static widths) or
//! from wiring it up (unknown renderer names, unreadable configuration).

use thiserror::Error;

/// Errors raised while configuring a table model or its renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A static column width is neither blank nor a non-negative integer.
    #[error("invalid column width at position {position}: {value:?}")]
    InvalidColumnWidth {
        /// 1-based position of the offending width.
        position: usize,
        /// The value as supplied.
        value: String,
    },

    /// A collaborator (renderer, filter, sink) could not be attached.
    #[error("invalid collaborator: {0}")]
    InvalidCollaborator(String),

    /// Renderer configuration could not be deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for model and renderer configuration.
pub type Result<T> = std::result::Result<T, RenderError>;
