//! # dyntable-render - Table model and output formats
//!
//! `dyntable-render` holds the data side of a dynamic table and turns it into
//! text. Rows arrive one at a time with any number of cells; the model keeps
//! the column count and column widths consistent as they do, and a renderer
//! prints the result as bordered text, CSV or HTML.
//!
//! ## Core Concepts
//!
//! - [`TableModel`]: column names, rows and column geometry. Optionally
//!   filters rows on insert with a [`TableFilter`].
//! - [`Row`]: cells plus optional per-cell colors and [`RowAttrs`].
//! - [`Renderer`]: the output format trait, implemented by [`TextRenderer`],
//!   [`CsvRenderer`] and [`HtmlRenderer`].
//! - [`RendererConfig`]: serde-loadable renderer selection and options.
//! - [`style_for`]: named color lookup for terminal and HTML output.
//!
//! ## Quick Start
//!
//! ```rust
//! use dyntable_render::{Renderer, Row, TableModel, TextRenderer};
//!
//! let mut model = TableModel::new();
//! model.set_column_names(["Host", "State"]);
//! model.add_row(["db1", "up"]);
//! model.add_row(Row::new(["db2", "down"]).with_colors(["", "red"]));
//!
//! let text = TextRenderer::default().color_disabled(true).print_table(&model);
//! assert_eq!(
//!     text,
//!     "------------\n\
//!      |Host|State|\n\
//!      ------------\n\
//!      |db1 |up   |\n\
//!      |db2 |down |\n\
//!      ------------\n"
//! );
//! ```
//!
//! ## Column Geometry
//!
//! Widths are counted in characters. Each column has an observed width (the
//! longest cell or name seen) and an optional static width set with
//! [`TableModel::set_column_widths`]. A static width truncates and pads text
//! to exactly that many characters; `0` leaves the column sized by its data.

mod color;
mod error;
pub mod model;
pub mod renderer;
mod util;

pub use color::{row_styles, style_for, CellStyle, ColorTarget, TERMINAL_RESET};
pub use error::{RenderError, Result};
pub use model::{FilterTable, Geometry, Row, RowAttrs, RowView, TableModel};
pub use renderer::{
    CsvOptions, CsvRenderer, HtmlOptions, HtmlRenderer, Renderer, RendererConfig, RendererKind,
    TextOptions, TextRenderer,
};
pub use util::{char_len, escape_html, fit_to_width, pad_right, repeat_to_width};

pub use dyntable_filter::TableFilter;
