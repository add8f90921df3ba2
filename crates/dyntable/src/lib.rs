//! # dyntable - Dynamic tables for the terminal and beyond
//!
//! A [`Table`] accepts rows of any length, keeps its column widths in step
//! with the data, and renders as bordered text, CSV or HTML. A filter
//! expression can pick and reorder columns and drop rows as they arrive.
//!
//! ## Core Concepts
//!
//! - [`Table`]: the entry point. Holds a [`TableModel`], a [`Renderer`] and
//!   an [`Output`].
//! - [`Output`]: standard output, any writer, or an in-memory buffer.
//! - [`TableFilter`]: `[columns;]column op value[;...]` expressions.
//! - [`TableConfig`]: YAML setup for renderer, columns, widths and filter.
//!
//! ## Quick Start
//!
//! ```rust
//! use dyntable::{Table, TableFilter};
//!
//! let filter = TableFilter::parse("1,3;2>=10").unwrap();
//! let mut table = Table::buffered().with_filter(filter);
//! table.set_column_names(["Name", "Score", "Team"]);
//! table.add_row(["ann", "12", "red"]);
//! table.add_row(["bo", "7", "blue"]);
//! table.render().unwrap();
//!
//! assert_eq!(
//!     table.buffer().unwrap(),
//!     "-----------\n\
//!      |Name|Team|\n\
//!      -----------\n\
//!      |ann |red |\n\
//!      -----------\n"
//! );
//! ```
//!
//! ## Ad-hoc Rows
//!
//! Rows can be printed as they are produced, without storing them. The
//! table's widths still grow with each printed row, so later rows line up
//! with at least everything printed before them.
//!
//! ```rust
//! use dyntable::Table;
//!
//! let mut table = Table::buffered();
//! table.set_column_names(["step", "status"]);
//! table.print_header().unwrap();
//! table.print_row(["fetch", "ok"]).unwrap();
//! table.print_footer().unwrap();
//! assert!(table.is_empty());
//! ```

mod config;
mod error;
mod output;
pub mod prelude;
mod table;

pub use config::{TableConfig, WidthValue};
pub use error::{Result, TableError};
pub use output::{Output, SharedWriter};
pub use table::Table;

pub use dyntable_filter::{FilterError, Op, TableFilter};
pub use dyntable_render::{
    CsvOptions, CsvRenderer, FilterTable, HtmlOptions, HtmlRenderer, RenderError, Renderer,
    RendererConfig, RendererKind, Row, RowAttrs, RowView, TableModel, TextOptions, TextRenderer,
};
