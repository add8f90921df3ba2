//! Separator-joined output.
//!
//! No padding, borders or colors. Each row is its cells joined by the
//! separator followed by a single `\n`.
//!
//! By default cells are written verbatim, so a cell containing the
//! separator breaks the column structure. With `quote` enabled (and a
//! single-byte separator) rows go through a [`csv::Writer`] that quotes such
//! fields.

use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{RowView, TableModel};

use super::{Renderer, RendererKind};

/// Options for [`CsvRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    pub separator: String,
    /// Quote fields that contain the separator, quotes or line breaks.
    pub quote: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            separator: ",".to_string(),
            quote: false,
        }
    }
}

/// Renders tables as CSV.
///
/// ```rust
/// use dyntable_render::{CsvRenderer, Renderer, TableModel};
///
/// let mut model = TableModel::new();
/// model.set_column_names(["a", "b"]);
/// model.add_row(["1", "2"]);
///
/// let out = CsvRenderer::default().separator("\t").print_table(&model);
/// assert_eq!(out, "a\tb\n1\t2\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRenderer {
    opts: CsvOptions,
}

impl CsvRenderer {
    pub fn new(opts: CsvOptions) -> Self {
        CsvRenderer { opts }
    }

    pub fn options(&self) -> &CsvOptions {
        &self.opts
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.opts.separator = separator.into();
        self
    }

    pub fn quote(mut self, quote: bool) -> Self {
        self.opts.quote = quote;
        self
    }

    fn quoting_delimiter(&self) -> Option<u8> {
        match self.opts.separator.as_bytes() {
            [b] if self.opts.quote && b.is_ascii() => Some(*b),
            _ => None,
        }
    }

    fn quoted_line(delimiter: u8, cells: &[String]) -> Option<String> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        let bytes = writer
            .write_record(cells)
            .map_err(|e| e.to_string())
            .and_then(|_| writer.into_inner().map_err(|e| e.to_string()))
            .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));

        match bytes {
            Ok(line) => Some(line),
            Err(err) => {
                warn!(error = %err, "csv quoting failed, writing row verbatim");
                None
            }
        }
    }
}

impl Renderer for CsvRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Csv
    }

    fn print_header(&self, model: &TableModel) -> String {
        if model.col_names().is_empty() {
            return String::new();
        }
        let names = model.padded_names();
        self.print_row(model, RowView::plain(&names))
    }

    fn print_row(&self, _model: &TableModel, row: RowView<'_>) -> String {
        if row.cells.is_empty() {
            return String::new();
        }
        if let Some(delimiter) = self.quoting_delimiter() {
            if let Some(line) = Self::quoted_line(delimiter, row.cells) {
                return line;
            }
        }
        let mut line = row.cells.join(self.opts.separator.as_str());
        line.push('\n');
        line
    }

    fn print_rows(&self, model: &TableModel) -> String {
        model
            .rows()
            .iter()
            .map(|row| {
                let cells = model.padded_cells(row);
                self.print_row(model, RowView::plain(&cells))
            })
            .collect()
    }

    fn print_table(&self, model: &TableModel) -> String {
        let mut out = self.print_header(model);
        out.push_str(&self.print_rows(model));
        out
    }

    fn boxed_clone(&self) -> Box<dyn Renderer> {
        Box::new(self.clone())
    }
}
