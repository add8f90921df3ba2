//! Error type for the table facade.

use dyntable_filter::FilterError;
use dyntable_render::RenderError;
use thiserror::Error;

/// Errors returned by [`Table`](crate::Table) operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// A filter expression could not be parsed.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Widths, renderer selection or configuration were rejected.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing to the output sink failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A shared writer's lock was poisoned by a panic in another holder.
    #[error("output writer lock poisoned")]
    OutputPoisoned,
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
