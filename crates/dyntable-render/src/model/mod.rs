//! The table data model.
//!
//! A [`TableModel`] stores column names and rows, and keeps the column
//! geometry consistent as data of varying length arrives:
//!
//! - `col_count` only grows. It is the largest cell count seen across the
//!   names, any stored row and any static width list.
//! - Rows shorter than `col_count` are right-padded with empty cells when
//!   stored. Rows stored before the table grew are padded when rendered
//!   (see [`TableModel::padded_cells`]).
//! - Static widths (`0` = auto) and observed widths are reconciled after
//!   every change; see [`Geometry`].
//!
//! An attached [`TableFilter`] rejects rows on insert and projects names,
//! cells and colors through its column rule.
//!
//! # Example
//!
//! ```rust
//! use dyntable_render::TableModel;
//!
//! let mut model = TableModel::new();
//! model.set_column_names(["Name", "Status"]);
//! model.add_row(["alice", "active", "extra"]);
//! model.add_row(["bob"]);
//!
//! assert_eq!(model.col_count(), 3);
//! assert_eq!(model.col_widths_real(), &[5, 6, 5]);
//! assert_eq!(model.rows()[1].cells(), &["bob", "", ""]);
//! ```

mod geometry;
mod row;

pub use geometry::Geometry;
pub use row::{Row, RowAttrs, RowView};

use std::borrow::Cow;
use std::fmt::Display;

use dyntable_filter::TableFilter;
use tracing::debug;

use crate::error::{RenderError, Result};

/// Rows, column names and column geometry of a table.
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    col_names: Vec<String>,
    rows: Vec<Row>,
    geometry: Geometry,
    filter: Option<TableFilter>,
}

impl TableModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        TableModel::default()
    }

    /// Creates an empty model that filters on insert.
    pub fn with_filter(filter: TableFilter) -> Self {
        TableModel {
            filter: Some(filter),
            ..TableModel::default()
        }
    }

    /// Attaches (or detaches) the insert filter. Already stored rows are
    /// left alone.
    pub fn set_filter(&mut self, filter: Option<TableFilter>) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Option<&TableFilter> {
        self.filter.as_ref()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Sets the column names, projected through the attached filter.
    pub fn set_column_names<I, T>(&mut self, names: I)
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let names: Vec<String> = names.into_iter().map(|n| n.to_string()).collect();
        let names = match &self.filter {
            Some(filter) => filter.filter_columns(&names),
            None => names,
        };
        self.geometry.observe(&names);
        self.col_names = names;
        self.reconcile_names();
    }

    /// Replaces the static column widths.
    ///
    /// Each width is trimmed; blank means auto (`0`). Anything else must be a
    /// non-negative integer. On error the model is unchanged.
    ///
    /// ```rust
    /// use dyntable_render::{RenderError, TableModel};
    ///
    /// let mut model = TableModel::new();
    /// model.set_column_widths(["10", "", "4"]).unwrap();
    /// assert_eq!(model.col_widths(), &[10, 0, 4]);
    ///
    /// let err = model.set_column_widths(["3", "wide"]).unwrap_err();
    /// assert!(matches!(err, RenderError::InvalidColumnWidth { position: 2, .. }));
    /// assert_eq!(model.col_widths(), &[10, 0, 4]);
    /// ```
    pub fn set_column_widths<I, W>(&mut self, widths: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: Display,
    {
        let parsed = widths
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                let text = w.to_string();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed
                    .parse::<usize>()
                    .map_err(|_| RenderError::InvalidColumnWidth {
                        position: i + 1,
                        value: text.clone(),
                    })
            })
            .collect::<Result<Vec<usize>>>()?;

        self.geometry.set_static(parsed);
        Ok(())
    }

    /// Adds a row. Returns `false` if the attached filter rejected it.
    ///
    /// The filter's row rules see the unprojected cells. Accepted rows are
    /// projected, padded to `col_count` and measured.
    pub fn add_row(&mut self, row: impl Into<Row>) -> bool {
        let (cells, mut colors, attrs) = row.into().into_parts();

        let (cells, colors) = match &self.filter {
            Some(filter) => {
                if !filter.check_row(&cells) {
                    debug!(cells = ?cells, filter = %filter, "row rejected by filter");
                    return false;
                }
                if !colors.is_empty() && colors.len() < cells.len() {
                    colors.resize(cells.len(), String::new());
                }
                (
                    filter.filter_columns(&cells),
                    filter.filter_columns(&colors),
                )
            }
            None => (cells, colors),
        };

        let row = self.absorb_adhoc(Row::from_parts(cells, colors, attrs));
        self.rows.push(row);
        true
    }

    /// Pads a row to `col_count` and records its widths without storing it.
    ///
    /// Used for rows printed on their own so the geometry stays consistent
    /// with what was shown.
    pub fn absorb_adhoc(&mut self, row: Row) -> Row {
        let (mut cells, colors, attrs) = row.into_parts();
        if cells.len() < self.col_count() {
            cells.resize(self.col_count(), String::new());
        }
        self.geometry.observe(&cells);
        Row::from_parts(cells, colors, attrs)
    }

    /// Drops all stored rows. Names and geometry are kept.
    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Pads the column names up to `col_count`. A table without names stays
    /// without names.
    pub fn reconcile_names(&mut self) {
        let count = self.col_count();
        if !self.col_names.is_empty() && self.col_names.len() < count {
            self.col_names.resize(count, String::new());
        }
    }

    /// Builds a new, independent model holding only the rows that pass
    /// `filter`, projected through its column rule.
    ///
    /// Colors and attributes stay with their rows. Static widths are not
    /// carried over.
    pub fn filter_table(&self, filter: &TableFilter) -> TableModel {
        let mut out = TableModel::new();
        if !self.col_names.is_empty() {
            out.set_column_names(filter.filter_columns(&self.col_names));
        }
        for row in &self.rows {
            let cells = self.padded_cells(row);
            if !filter.check_row(&cells) {
                continue;
            }
            let mut colors = row.colors().to_vec();
            if !colors.is_empty() && colors.len() < cells.len() {
                colors.resize(cells.len(), String::new());
            }
            let projected = Row::from_parts(
                filter.filter_columns(&cells),
                filter.filter_columns(&colors),
                row.attrs().cloned(),
            );
            out.add_row(projected);
        }
        out
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn col_count(&self) -> usize {
        self.geometry.col_count()
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }

    pub fn col_widths(&self) -> &[usize] {
        self.geometry.col_widths()
    }

    pub fn col_widths_real(&self) -> &[usize] {
        self.geometry.col_widths_real()
    }

    pub fn data_max_width(&self) -> usize {
        self.geometry.data_max_width()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names padded to `col_count`.
    pub fn padded_names(&self) -> Cow<'_, [String]> {
        pad_to(&self.col_names, self.col_count())
    }

    /// A stored row's cells padded to the current `col_count`.
    pub fn padded_cells<'a>(&self, row: &'a Row) -> Cow<'a, [String]> {
        pad_to(row.cells(), self.col_count())
    }
}

fn pad_to(cells: &[String], count: usize) -> Cow<'_, [String]> {
    if cells.len() >= count {
        Cow::Borrowed(cells)
    } else {
        let mut owned = cells.to_vec();
        owned.resize(count, String::new());
        Cow::Owned(owned)
    }
}

/// Table-level filtering for [`TableFilter`].
///
/// ```rust
/// use dyntable_filter::TableFilter;
/// use dyntable_render::{FilterTable, TableModel};
///
/// let mut model = TableModel::new();
/// model.set_column_names(["id", "name"]);
/// model.add_row(["1", "keep"]);
/// model.add_row(["2", "drop"]);
///
/// let filter = TableFilter::parse("2;2=keep").unwrap();
/// let filtered = filter.filter_table(&model);
/// assert_eq!(filtered.col_names(), &["name"]);
/// assert_eq!(filtered.len(), 1);
/// ```
pub trait FilterTable {
    /// Produces a new model with only the passing rows and selected columns.
    fn filter_table(&self, model: &TableModel) -> TableModel;
}

impl FilterTable for TableFilter {
    fn filter_table(&self, model: &TableModel) -> TableModel {
        model.filter_table(self)
    }
}
