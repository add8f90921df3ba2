//! Filter expressions for dynamic tables.
//!
//! A filter selects which columns survive (and in what order) and which rows
//! are kept. Filters are written as a short expression:
//!
//! ```text
//! ([column ids];)[column id][operator][value](;[column id][operator][value])...
//! ```
//!
//! - **column ids**: comma separated 1-based ids; `2-4` is an inclusive range
//!   and a trailing `4-` selects column 4 through the end of each row.
//! - **operator**: one of `>=`, `<=`, `>`, `<`, `!=`, `=`, `!/`, `/`
//!   (`/` is "contains", `!/` is "does not contain").
//! - **value**: a number, a date/time, or a string; the type is inferred in
//!   that order.
//!
//! # Quick Start
//!
//! ```rust
//! use dyntable_filter::TableFilter;
//!
//! // Columns 1, 3 and 4; only rows whose first column is after noon.
//! let filter = TableFilter::parse("1,3,4;1>2014-07-30 12:00:00").unwrap();
//!
//! let late = ["2014-07-30 16:00:00", "b", "c", "d"];
//! let early = ["2014-07-30 08:00:00", "b", "c", "d"];
//!
//! assert!(filter.check_row(&late));
//! assert!(!filter.check_row(&early));
//! assert_eq!(
//!     filter.filter_columns(&late),
//!     vec!["2014-07-30 16:00:00", "c", "d"]
//! );
//! ```
//!
//! # Value Types and Operators
//!
//! | Type | Operators |
//! |------|-----------|
//! | Number | all |
//! | Date | all |
//! | String | `=`, `!=`, `/`, `!/` |
//!
//! Cells are coerced to the rule's value type when a row is checked. A cell
//! that cannot be coerced (say, `abc` against a date rule) fails the rule; it
//! is never an error.

mod error;
mod filter;
mod op;
mod rule;
mod value;

// Re-export public API
pub use error::{FilterError, Result};
pub use filter::TableFilter;
pub use op::Op;
pub use rule::{ColumnRule, RowRule};
pub use value::{parse_datetime, parse_number, Timestamp, TypedValue, ValueKind};
