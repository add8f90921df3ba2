//! Column width bookkeeping.
//!
//! Two width arrays are tracked side by side: the static widths set by the
//! user (`0` meaning auto) and the real widths observed in the data. After
//! every change the shorter array is padded to the length of the longer one
//! and the column count follows.

use tracing::trace;

use crate::util::char_len;

/// Column geometry of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geometry {
    col_count: usize,
    col_widths: Vec<usize>,
    col_widths_real: Vec<usize>,
    data_max_width: usize,
}

impl Geometry {
    /// Number of columns. Never decreases.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Static widths; `0` means the column is sized from its data.
    pub fn col_widths(&self) -> &[usize] {
        &self.col_widths
    }

    /// Longest cell seen so far in each column, header names included.
    pub fn col_widths_real(&self) -> &[usize] {
        &self.col_widths_real
    }

    /// Width consumed by cell content once static truncation is applied.
    pub fn data_max_width(&self) -> usize {
        self.data_max_width
    }

    /// The width column `index` renders at: its static width when set,
    /// otherwise its observed width.
    pub fn render_width(&self, index: usize) -> usize {
        match self.col_widths.get(index) {
            Some(&w) if w > 0 => w,
            _ => self.col_widths_real.get(index).copied().unwrap_or(0),
        }
    }

    /// Records the cell lengths of a row (or the column names).
    pub(crate) fn observe<S: AsRef<str>>(&mut self, cells: &[S]) {
        for (i, cell) in cells.iter().enumerate() {
            let len = char_len(cell.as_ref());
            match self.col_widths_real.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => self.col_widths_real.push(len),
            }
        }
        self.reconcile();
    }

    /// Replaces the static widths.
    pub(crate) fn set_static(&mut self, widths: Vec<usize>) {
        self.col_widths = widths;
        self.reconcile();
    }

    /// Pads the shorter width array, grows the column count and recomputes
    /// `data_max_width`.
    fn reconcile(&mut self) {
        let set = self.col_widths.len();
        let real = self.col_widths_real.len();

        if set > real {
            let last = self.col_widths_real.last().copied().unwrap_or(0);
            self.col_widths_real.resize(set, last);
        } else if real > set {
            self.col_widths.resize(real, 0);
        }
        self.col_count = self.col_count.max(set).max(real);

        self.data_max_width = (0..self.col_widths_real.len())
            .map(|i| self.render_width(i))
            .sum();

        trace!(
            col_count = self.col_count,
            data_max_width = self.data_max_width,
            "reconciled column widths"
        );
    }
}
