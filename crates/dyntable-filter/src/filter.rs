//! The table filter: one optional column rule plus any number of row rules.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::Result;
use crate::op::Op;
use crate::rule::{ColumnRule, RowRule};

/// Filter for selecting columns and rows of a table.
///
/// A filter is usually built from an expression:
///
/// ```text
/// [column ids;]row rule[;row rule...]
/// ```
///
/// The first `;`-separated segment is a column rule if it contains a comma or
/// contains no operator at all (so `"4-"` alone is a column rule); otherwise
/// it is the first row rule. A row passes when every row rule matches.
///
/// # Example
///
/// ```
/// use dyntable_filter::TableFilter;
///
/// let filter = TableFilter::parse("1,3-;2/tds").unwrap();
///
/// let row = ["a", "has_tds_inside", "c", "d"];
/// assert!(filter.check_row(&row));
/// assert_eq!(filter.filter_columns(&row), vec!["a", "c", "d"]);
///
/// assert!(!filter.check_row(&["a", "nope", "c", "d"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFilter {
    col_rule: Option<ColumnRule>,
    row_rules: Vec<RowRule>,
}

impl TableFilter {
    /// Creates an empty filter that passes every row and column.
    pub fn new() -> Self {
        TableFilter::default()
    }

    /// Parses a full filter expression.
    pub fn parse(text: &str) -> Result<Self> {
        let mut filter = TableFilter::new();
        let mut segments = text.split(';');

        if let Some(first) = segments.next() {
            if first.contains(',') || Op::split_rule(first).is_none() {
                filter.set_col_rule(first)?;
            } else {
                filter.add_row_rule(first)?;
            }
        }
        for segment in segments {
            filter.add_row_rule(segment)?;
        }

        debug!(
            filter = text,
            columns = %filter.col_rule.as_ref().map(ToString::to_string).unwrap_or_default(),
            row_rules = filter.row_rules.len(),
            "parsed table filter"
        );
        Ok(filter)
    }

    /// Sets (replaces) the column rule from a comma separated id list.
    pub fn set_col_rule(&mut self, text: &str) -> Result<()> {
        self.col_rule = Some(ColumnRule::parse(text)?);
        Ok(())
    }

    /// Adds a row rule.
    ///
    /// Useful when a comparison value contains a `;`, which the expression
    /// syntax cannot carry.
    pub fn add_row_rule(&mut self, text: &str) -> Result<()> {
        self.row_rules.push(RowRule::parse(text)?);
        Ok(())
    }

    /// Adds an already built row rule.
    pub fn push_row_rule(&mut self, rule: RowRule) {
        self.row_rules.push(rule);
    }

    /// Returns the column rule, if one is set.
    pub fn col_rule(&self) -> Option<&ColumnRule> {
        self.col_rule.as_ref()
    }

    /// Returns the row rules.
    pub fn row_rules(&self) -> &[RowRule] {
        &self.row_rules
    }

    /// Returns `true` if this filter has no rules (passes everything).
    pub fn is_empty(&self) -> bool {
        self.col_rule.is_none() && self.row_rules.is_empty()
    }

    /// Returns `true` if every row rule matches `cells`.
    pub fn check_row<S: AsRef<str>>(&self, cells: &[S]) -> bool {
        self.row_rules.iter().all(|rule| rule.matches(cells))
    }

    /// Projects a list through the column rule. Without a column rule this is
    /// the identity.
    pub fn filter_columns<T: Clone>(&self, cells: &[T]) -> Vec<T> {
        match &self.col_rule {
            Some(rule) => rule.project(cells),
            None => cells.to_vec(),
        }
    }
}

impl FromStr for TableFilter {
    type Err = crate::error::FilterError;

    fn from_str(s: &str) -> Result<Self> {
        TableFilter::parse(s)
    }
}

impl fmt::Display for TableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments: Vec<String> = Vec::with_capacity(self.row_rules.len() + 1);
        if let Some(rule) = &self.col_rule {
            segments.push(rule.to_string());
        }
        segments.extend(self.row_rules.iter().map(ToString::to_string));
        f.write_str(&segments.join(";"))
    }
}
