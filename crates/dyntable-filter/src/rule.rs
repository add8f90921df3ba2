//! Column and row rules.
//!
//! A [`ColumnRule`] selects and orders columns; a [`RowRule`] is a single
//! `{column, operator, value}` predicate a row must satisfy.

use std::fmt;

use crate::error::{FilterError, Result};
use crate::op::Op;
use crate::value::TypedValue;

/// Ordered column selection, using 1-based column ids.
///
/// Parsed from a comma separated list where each id is either a single
/// column (`3`) or an inclusive range (`2-4`). The last id may be an open
/// range (`4-`) selecting that column and everything after it.
///
/// ```
/// use dyntable_filter::ColumnRule;
///
/// let rule = ColumnRule::parse("1,3-").unwrap();
/// assert_eq!(rule.project(&["a", "b", "c", "d", "e"]), vec!["a", "c", "d", "e"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRule {
    indices: Vec<usize>,
    open_from: Option<usize>,
}

impl ColumnRule {
    /// Creates a rule from explicit 1-based indices and an optional open
    /// range start.
    pub fn new(indices: Vec<usize>, open_from: Option<usize>) -> Self {
        ColumnRule { indices, open_from }
    }

    /// Parses a comma separated column id list.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens: Vec<&str> = text.split(',').map(str::trim).collect();

        let mut open_from = None;
        if let Some(start) = tokens.last().and_then(|last| last.strip_suffix('-')) {
            open_from = Some(parse_index(text, start)?);
            tokens.pop();
        }

        let mut indices = Vec::with_capacity(tokens.len());
        for token in tokens {
            if token.ends_with('-') {
                return Err(FilterError::column(
                    text,
                    "only the last column id may be an open range",
                ));
            }
            match token.split_once('-') {
                Some((from, to)) => {
                    let from = parse_index(text, from)?;
                    let to = parse_index(text, to)?;
                    if from > to {
                        return Err(FilterError::column(
                            text,
                            format!("range {}-{} ends before it starts", from, to),
                        ));
                    }
                    indices.extend(from..=to);
                }
                None => indices.push(parse_index(text, token)?),
            }
        }

        Ok(ColumnRule { indices, open_from })
    }

    /// Returns the explicit 1-based indices, in selection order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the start of the open range, if any.
    pub fn open_from(&self) -> Option<usize> {
        self.open_from
    }

    /// Returns `true` if the rule selects nothing.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.open_from.is_none()
    }

    /// Projects a cell (or name, or color) list through the rule.
    ///
    /// Explicit ids come first, in order, duplicates preserved; the open range
    /// follows. Ids beyond the end of `cells` are skipped.
    pub fn project<T: Clone>(&self, cells: &[T]) -> Vec<T> {
        let mut out: Vec<T> = self
            .indices
            .iter()
            .filter_map(|&i| i.checked_sub(1).and_then(|i| cells.get(i)).cloned())
            .collect();

        if let Some(start) = self.open_from {
            if let Some(rest) = cells.get(start.saturating_sub(1)..) {
                out.extend_from_slice(rest);
            }
        }

        out
    }
}

impl fmt::Display for ColumnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<String> = self.indices.iter().map(|i| i.to_string()).collect();
        if let Some(start) = self.open_from {
            ids.push(format!("{}-", start));
        }
        f.write_str(&ids.join(","))
    }
}

fn parse_index(rule: &str, token: &str) -> Result<usize> {
    match token.trim().parse::<usize>() {
        Ok(0) => Err(FilterError::column(rule, "column ids start at 1")),
        Ok(index) => Ok(index),
        Err(_) => Err(FilterError::column(
            rule,
            format!("'{}' is not a column number", token),
        )),
    }
}

/// A single row predicate.
///
/// ```
/// use dyntable_filter::RowRule;
///
/// let rule = RowRule::parse("2/tds").unwrap();
/// assert!(rule.matches(&["x", "has_tds_inside"]));
/// assert!(!rule.matches(&["x", "nope"]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowRule {
    column: usize,
    op: Op,
    value: TypedValue,
}

impl RowRule {
    /// Creates a rule, rejecting ordering operators against string values.
    ///
    /// Containment operators always compare text, so a non-string value is
    /// converted to its textual form.
    pub fn new(column: usize, op: Op, value: TypedValue) -> Result<Self> {
        let value = match value {
            TypedValue::String(_) => value,
            other if op.is_containment() => TypedValue::String(other.to_string()),
            other => other,
        };
        let rule = RowRule { column, op, value };
        if column == 0 {
            return Err(FilterError::row(&rule.to_string(), "column ids start at 1"));
        }
        if matches!(rule.value, TypedValue::String(_)) && !op.is_string_op() {
            return Err(FilterError::InvalidOperatorForType {
                op,
                value_type: rule.value.kind().as_str(),
                rule: rule.to_string(),
            });
        }
        Ok(rule)
    }

    /// Parses `[column id][operator][value]`.
    ///
    /// The column id and value are trimmed. The value type is inferred
    /// (number, date, string) except for `/` and `!/`, which always compare
    /// text.
    pub fn parse(text: &str) -> Result<Self> {
        let (column, op, value) = Op::split_rule(text)
            .ok_or_else(|| FilterError::row(text, "row rule must contain an operator"))?;

        let column = match column.trim().parse::<usize>() {
            Ok(0) => return Err(FilterError::row(text, "column ids start at 1")),
            Ok(column) => column,
            Err(_) => {
                return Err(FilterError::row(
                    text,
                    format!("column '{}' must be a number", column),
                ))
            }
        };

        let value = value.trim();
        let value = if op.is_containment() {
            TypedValue::String(value.to_string())
        } else {
            TypedValue::infer(value)
        };

        if matches!(value, TypedValue::String(_)) && !op.is_string_op() {
            return Err(FilterError::InvalidOperatorForType {
                op,
                value_type: value.kind().as_str(),
                rule: text.to_string(),
            });
        }

        Ok(RowRule { column, op, value })
    }

    /// Returns the 1-based column this rule tests.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Returns the threshold value.
    pub fn value(&self) -> &TypedValue {
        &self.value
    }

    /// Evaluates the rule against a row.
    ///
    /// A missing column or a cell that cannot be coerced to the value's type
    /// does not match.
    pub fn matches<S: AsRef<str>>(&self, cells: &[S]) -> bool {
        let Some(cell) = cells.get(self.column - 1).map(AsRef::as_ref) else {
            return false;
        };

        if let TypedValue::String(needle) = &self.value {
            match self.op {
                Op::Contains => return cell.contains(needle.as_str()),
                Op::NotContains => return !cell.contains(needle.as_str()),
                _ => {}
            }
        }

        match self.value.compare_cell(cell) {
            Ok(ordering) => self.op.eval_threshold_ordering(ordering),
            Err(()) => false,
        }
    }
}

impl fmt::Display for RowRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.value)
    }
}
