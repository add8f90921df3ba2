//! Table prelude for convenient imports.
//!
//! ```rust
//! use dyntable::prelude::*;
//!
//! let mut table = Table::buffered().with_renderer(CsvRenderer::default());
//! table.add_row(Row::new(["a", "b"]).with_colors(["red"]));
//! table.render()?;
//! assert_eq!(table.buffer(), Some("a,b\n"));
//! # Ok::<(), TableError>(())
//! ```

// Facade
pub use crate::{Output, Table, TableConfig, TableError};

// Model and renderers
pub use dyntable_render::{
    CsvRenderer, FilterTable, HtmlRenderer, Renderer, RendererConfig, RendererKind, Row,
    RowAttrs, TableModel, TextRenderer,
};

// Filtering
pub use dyntable_filter::TableFilter;
