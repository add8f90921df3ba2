//! Error types for the filter crate.

use thiserror::Error;

use crate::op::Op;

/// Errors that can occur while parsing a filter expression.
///
/// Evaluation never fails: a cell that cannot be coerced to a rule's value
/// type simply does not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The column rule (the comma separated id list) is malformed.
    #[error("invalid column filter '{rule}': {reason}")]
    InvalidColumnFilter { rule: String, reason: String },

    /// A row rule is missing an operator or names an invalid column.
    #[error("invalid row filter '{rule}': {reason}")]
    InvalidRowFilter { rule: String, reason: String },

    /// Operator is not valid for the inferred value type.
    #[error("operator '{op}' is not valid for {value_type} values in row filter '{rule}'")]
    InvalidOperatorForType {
        op: Op,
        value_type: &'static str,
        rule: String,
    },
}

impl FilterError {
    pub(crate) fn column(rule: &str, reason: impl Into<String>) -> Self {
        FilterError::InvalidColumnFilter {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn row(rule: &str, reason: impl Into<String>) -> Self {
        FilterError::InvalidRowFilter {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
