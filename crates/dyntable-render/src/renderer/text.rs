//! Plain text tables with borders, padding and terminal colors.
//!
//! ```text
//! --------------
//! |Name |Status|
//! --------------
//! |alice|active|
//! |bob  |idle  |
//! --------------
//! ```
//!
//! Every physical line starts with `indent` spaces. A row is the vertical
//! border, then for each cell: padding, the content fitted to the column
//! width, padding, and the column separator (the vertical border after the
//! last cell).
//!
//! # Example
//!
//! ```rust
//! use dyntable_render::{Renderer, TableModel, TextRenderer};
//!
//! let mut model = TableModel::new();
//! model.set_column_names(["id", "name"]);
//! model.add_row(["1", "alice"]);
//!
//! let renderer = TextRenderer::default().padding(1);
//! assert_eq!(
//!     renderer.print_table(&model),
//!     "--------------\n\
//!      | id | name  |\n\
//!      --------------\n\
//!      | 1  | alice |\n\
//!      --------------\n"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{row_styles, ColorTarget};
use crate::model::{RowView, TableModel};
use crate::util::{char_len, fit_to_width, pad_right, repeat_to_width};

use super::{Renderer, RendererKind};

/// Options for [`TextRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Spaces before every line.
    pub indent: usize,
    /// Empties all border and separator strings.
    pub borderless: bool,
    pub color_disabled: bool,
    /// Number of `padding_char` repetitions on each side of a cell.
    pub padding: usize,
    pub padding_char: String,
    /// Fills cells up to their column width.
    pub fill_char: String,
    pub h_border: String,
    pub v_border: String,
    pub col_sep: String,
}

impl TextOptions {
    /// Largest accepted `indent`; larger values are clamped.
    pub const MAX_INDENT: usize = 1024;
    /// Largest accepted `padding`; larger values are clamped.
    pub const MAX_PADDING: usize = 1024;

    fn clamped(mut self) -> Self {
        self.indent = self.indent.min(Self::MAX_INDENT);
        self.padding = self.padding.min(Self::MAX_PADDING);
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            indent: 0,
            borderless: false,
            color_disabled: false,
            padding: 0,
            padding_char: " ".to_string(),
            fill_char: " ".to_string(),
            h_border: "-".to_string(),
            v_border: "|".to_string(),
            col_sep: "|".to_string(),
        }
    }
}

/// Renders tables as bordered plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRenderer {
    opts: TextOptions,
}

impl TextRenderer {
    pub fn new(opts: TextOptions) -> Self {
        TextRenderer {
            opts: opts.clamped(),
        }
    }

    pub fn options(&self) -> &TextOptions {
        &self.opts
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.opts.indent = indent.min(TextOptions::MAX_INDENT);
        self
    }

    pub fn borderless(mut self, borderless: bool) -> Self {
        self.opts.borderless = borderless;
        self
    }

    pub fn color_disabled(mut self, disabled: bool) -> Self {
        self.opts.color_disabled = disabled;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.opts.padding = padding.min(TextOptions::MAX_PADDING);
        self
    }

    pub fn padding_char(mut self, s: impl Into<String>) -> Self {
        self.opts.padding_char = s.into();
        self
    }

    pub fn fill_char(mut self, s: impl Into<String>) -> Self {
        self.opts.fill_char = s.into();
        self
    }

    pub fn h_border(mut self, s: impl Into<String>) -> Self {
        self.opts.h_border = s.into();
        self
    }

    pub fn v_border(mut self, s: impl Into<String>) -> Self {
        self.opts.v_border = s.into();
        self
    }

    pub fn col_sep(mut self, s: impl Into<String>) -> Self {
        self.opts.col_sep = s.into();
        self
    }

    fn h_border_str(&self) -> &str {
        if self.opts.borderless {
            ""
        } else {
            &self.opts.h_border
        }
    }

    fn v_border_str(&self) -> &str {
        if self.opts.borderless {
            ""
        } else {
            &self.opts.v_border
        }
    }

    fn col_sep_str(&self) -> &str {
        if self.opts.borderless {
            ""
        } else {
            &self.opts.col_sep
        }
    }

    fn indent_str(&self) -> String {
        " ".repeat(self.opts.indent)
    }

    /// Width of a horizontal rule for `model`, in characters.
    pub fn rule_width(&self, model: &TableModel) -> usize {
        let cols = model.col_count();
        let borders = char_len(self.v_border_str()).saturating_mul(2);
        let padding = cols
            .saturating_mul(2)
            .saturating_mul(self.opts.padding)
            .saturating_mul(char_len(&self.opts.padding_char));
        let separators = cols
            .saturating_sub(1)
            .saturating_mul(char_len(self.col_sep_str()));
        model
            .data_max_width()
            .saturating_add(borders)
            .saturating_add(padding)
            .saturating_add(separators)
    }

    /// A full horizontal rule line, or nothing when there is no horizontal
    /// border.
    fn rule(&self, model: &TableModel) -> String {
        let h = self.h_border_str();
        if h.is_empty() {
            return String::new();
        }
        format!(
            "{}{}\n",
            self.indent_str(),
            repeat_to_width(h, self.rule_width(model))
        )
    }
}

impl Renderer for TextRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Text
    }

    fn print_header(&self, model: &TableModel) -> String {
        let mut out = self.rule(model);
        if model.col_names().is_empty() {
            return out;
        }
        let names = model.padded_names();
        out.push_str(&self.print_row(model, RowView::plain(&names)));
        out.push_str(&self.rule(model));
        out
    }

    fn print_row(&self, model: &TableModel, row: RowView<'_>) -> String {
        let pad = self.opts.padding_char.repeat(self.opts.padding);
        let v_border = self.v_border_str();
        let col_sep = self.col_sep_str();
        let fill = self.opts.fill_char.as_str();
        let count = row.cells.len();

        let styles = if self.opts.color_disabled {
            vec![None; count]
        } else {
            row_styles(ColorTarget::Terminal, row.colors, count)
        };

        let mut out = self.indent_str();
        out.push_str(v_border);
        for (i, (cell, style)) in row.cells.iter().zip(&styles).enumerate() {
            let content = match model.col_widths().get(i) {
                Some(&w) if w > 0 => fit_to_width(cell, w, fill),
                _ => {
                    let real = model.col_widths_real().get(i).copied().unwrap_or(0);
                    pad_right(cell, real, fill)
                }
            };
            out.push_str(&pad);
            match style {
                Some(style) => out.push_str(&style.wrap(&content)),
                None => out.push_str(&content),
            }
            out.push_str(&pad);
            out.push_str(if i + 1 == count { v_border } else { col_sep });
        }
        out.push('\n');
        out
    }

    fn print_rows(&self, model: &TableModel) -> String {
        model
            .rows()
            .iter()
            .map(|row| {
                let cells = model.padded_cells(row);
                let view = RowView {
                    cells: &cells,
                    ..row.view()
                };
                self.print_row(model, view)
            })
            .collect()
    }

    fn print_footer(&self, model: &TableModel) -> String {
        self.rule(model)
    }

    fn print_table(&self, model: &TableModel) -> String {
        let mut out = self.print_header(model);
        out.push_str(&self.print_rows(model));
        out.push_str(&self.print_footer(model));
        out
    }

    fn boxed_clone(&self) -> Box<dyn Renderer> {
        Box::new(self.clone())
    }
}
