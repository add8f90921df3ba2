//! HTML table output.
//!
//! ```text
//! <table ATTR>
//!   <thead ATTR>
//!     <tr>
//!       <th>Col1</th><th>Col2</th>
//!     </tr>
//!   </thead>
//!   <tbody ATTR>
//!     <tr ROWATTR>
//!       <td CELLATTR>a</td><td>b</td>
//!     </tr>
//!   </tbody>
//! </table>
//! ```
//!
//! Attribute strings are inserted verbatim. The `table`, `thead` and `tbody`
//! tags always keep the space before their attribute, so an empty one renders
//! as `<table >`. Row and cell attributes come from each row's
//! [`RowAttrs`](crate::RowAttrs) and are left out, space included, when empty.
//! Cell text is written as-is so cells may carry markup; set
//! [`HtmlOptions::escape`] to escape it. Colors become nested inline tags
//! around the text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::color::{row_styles, ColorTarget};
use crate::model::{RowView, TableModel};
use crate::util::escape_html;

use super::{Renderer, RendererKind};

/// Options for [`HtmlRenderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    pub color_disabled: bool,
    pub table_attr: String,
    pub thead_attr: String,
    pub tbody_attr: String,
    /// Escape `&`, `<`, `>` and `"` in cell text.
    pub escape: bool,
}

/// Renders tables as HTML.
///
/// ```rust
/// use dyntable_render::{HtmlRenderer, Renderer, Row, RowAttrs, TableModel};
///
/// let mut model = TableModel::new();
/// model.add_row(
///     Row::new(["x"]).with_attrs(RowAttrs::new().with_cell_attrs(["class=\"num\""])),
/// );
///
/// let out = HtmlRenderer::default().print_rows(&model);
/// assert_eq!(
///     out,
///     "  <tbody >\n    <tr>\n      <td class=\"num\">x</td>\n    </tr>\n  </tbody>\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRenderer {
    opts: HtmlOptions,
}

fn section_tag(tag: &str, attr: &str) -> String {
    format!("<{} {}>", tag, attr)
}

fn open_tag(tag: &str, attr: &str) -> String {
    if attr.is_empty() {
        format!("<{}>", tag)
    } else {
        format!("<{} {}>", tag, attr)
    }
}

impl HtmlRenderer {
    pub fn new(opts: HtmlOptions) -> Self {
        HtmlRenderer { opts }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.opts
    }

    pub fn color_disabled(mut self, disabled: bool) -> Self {
        self.opts.color_disabled = disabled;
        self
    }

    pub fn table_attr(mut self, attr: impl Into<String>) -> Self {
        self.opts.table_attr = attr.into();
        self
    }

    pub fn thead_attr(mut self, attr: impl Into<String>) -> Self {
        self.opts.thead_attr = attr.into();
        self
    }

    pub fn tbody_attr(mut self, attr: impl Into<String>) -> Self {
        self.opts.tbody_attr = attr.into();
        self
    }

    pub fn escape(mut self, escape: bool) -> Self {
        self.opts.escape = escape;
        self
    }

    fn render_row(&self, row: RowView<'_>, cell_tag: &str) -> String {
        let row_attr = row.attrs.and_then(|a| a.row_attr()).unwrap_or("");
        let styles = if self.opts.color_disabled {
            vec![None; row.cells.len()]
        } else {
            row_styles(ColorTarget::Html, row.colors, row.cells.len())
        };

        let mut out = format!("    {}\n      ", open_tag("tr", row_attr));
        for (i, (cell, style)) in row.cells.iter().zip(&styles).enumerate() {
            let cell_attr = row.attrs.and_then(|a| a.cell_attr(i)).unwrap_or("");
            let text = if self.opts.escape {
                Cow::Owned(escape_html(cell))
            } else {
                Cow::Borrowed(cell.as_str())
            };
            out.push_str(&open_tag(cell_tag, cell_attr));
            match style {
                Some(style) => out.push_str(&style.wrap(&text)),
                None => out.push_str(&text),
            }
            out.push_str(&format!("</{}>", cell_tag));
        }
        out.push_str("\n    </tr>\n");
        out
    }
}

impl Renderer for HtmlRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Html
    }

    fn print_header(&self, model: &TableModel) -> String {
        if model.col_names().is_empty() {
            return String::new();
        }
        let names = model.padded_names();
        let mut out = format!("  {}\n", section_tag("thead", &self.opts.thead_attr));
        out.push_str(&self.render_row(RowView::plain(&names), "th"));
        out.push_str("  </thead>\n");
        out
    }

    fn print_row(&self, _model: &TableModel, row: RowView<'_>) -> String {
        self.render_row(row, "td")
    }

    fn print_rows(&self, model: &TableModel) -> String {
        let mut out = format!("  {}\n", section_tag("tbody", &self.opts.tbody_attr));
        for row in model.rows() {
            let cells = model.padded_cells(row);
            let view = RowView {
                cells: &cells,
                ..row.view()
            };
            out.push_str(&self.print_row(model, view));
        }
        out.push_str("  </tbody>\n");
        out
    }

    fn print_table(&self, model: &TableModel) -> String {
        let mut out = format!("{}\n", section_tag("table", &self.opts.table_attr));
        out.push_str(&self.print_header(model));
        out.push_str(&self.print_rows(model));
        out.push_str("</table>\n");
        out
    }

    fn boxed_clone(&self) -> Box<dyn Renderer> {
        Box::new(self.clone())
    }
}
