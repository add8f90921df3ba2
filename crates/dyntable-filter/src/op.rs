//! Comparison operators for row rules.
//!
//! The [`Op`] enum defines the eight operators of the filter grammar. Ordering
//! operators are evaluated with the threshold on the left: a rule `col > X`
//! holds when `X < cell`, which is why [`Op::eval_threshold_ordering`] takes
//! the ordering of the threshold relative to the cell.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Comparison operator for a row rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `!=`
    Ne,
    /// `=`
    Eq,
    /// `!/`, cell text does not contain the value.
    NotContains,
    /// `/`, cell text contains the value.
    Contains,
}

impl Op {
    /// Operators in the order they are searched for inside a rule.
    ///
    /// Two-character operators come before their one-character prefixes so
    /// that `>=` wins over `>` on the same text.
    pub const PRIORITY: [Op; 8] = [
        Op::Gte,
        Op::Lte,
        Op::Gt,
        Op::Lt,
        Op::Ne,
        Op::Eq,
        Op::NotContains,
        Op::Contains,
    ];

    /// Returns the textual symbol of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Gte => ">=",
            Op::Lte => "<=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Ne => "!=",
            Op::Eq => "=",
            Op::NotContains => "!/",
            Op::Contains => "/",
        }
    }

    /// Returns `true` if this operator may be used against string values.
    pub fn is_string_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Contains | Op::NotContains)
    }

    /// Returns `true` for the four ordering operators.
    pub fn is_ordering_op(self) -> bool {
        matches!(self, Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Returns `true` for `/` and `!/`.
    pub fn is_containment(self) -> bool {
        matches!(self, Op::Contains | Op::NotContains)
    }

    /// Evaluates the operator given `threshold.partial_cmp(cell)`.
    ///
    /// `None` (an unordered pair such as NaN) only satisfies `!=`.
    pub fn eval_threshold_ordering(self, ordering: Option<Ordering>) -> bool {
        let Some(ordering) = ordering else {
            return self == Op::Ne;
        };
        match self {
            Op::Gt => ordering == Ordering::Less,
            Op::Gte => ordering != Ordering::Greater,
            Op::Lt => ordering == Ordering::Greater,
            Op::Lte => ordering != Ordering::Less,
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Contains | Op::NotContains => false,
        }
    }

    /// Finds the first operator (in [`Op::PRIORITY`] order) occurring in
    /// `rule` and splits the rule around its first occurrence.
    pub fn split_rule(rule: &str) -> Option<(&str, Op, &str)> {
        Op::PRIORITY.iter().find_map(|&op| {
            rule.split_once(op.symbol())
                .map(|(left, right)| (left, op, right))
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::PRIORITY
            .iter()
            .copied()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| format!("unknown operator: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_type_checks() {
        assert!(Op::Eq.is_string_op());
        assert!(Op::Contains.is_string_op());
        assert!(Op::NotContains.is_string_op());
        assert!(!Op::Gt.is_string_op());

        assert!(Op::Lte.is_ordering_op());
        assert!(!Op::Ne.is_ordering_op());
        assert!(Op::Contains.is_containment());
        assert!(!Op::Eq.is_containment());
    }

    #[test]
    fn reversed_operand_convention() {
        // threshold < cell  =>  cell > threshold
        assert!(Op::Gt.eval_threshold_ordering(Some(Ordering::Less)));
        assert!(!Op::Gt.eval_threshold_ordering(Some(Ordering::Equal)));
        assert!(!Op::Gt.eval_threshold_ordering(Some(Ordering::Greater)));

        assert!(Op::Gte.eval_threshold_ordering(Some(Ordering::Less)));
        assert!(Op::Gte.eval_threshold_ordering(Some(Ordering::Equal)));
        assert!(!Op::Gte.eval_threshold_ordering(Some(Ordering::Greater)));

        assert!(Op::Lt.eval_threshold_ordering(Some(Ordering::Greater)));
        assert!(!Op::Lt.eval_threshold_ordering(Some(Ordering::Equal)));
        assert!(!Op::Lt.eval_threshold_ordering(Some(Ordering::Less)));

        assert!(Op::Lte.eval_threshold_ordering(Some(Ordering::Greater)));
        assert!(Op::Lte.eval_threshold_ordering(Some(Ordering::Equal)));
        assert!(!Op::Lte.eval_threshold_ordering(Some(Ordering::Less)));
    }

    #[test]
    fn unordered_only_satisfies_ne() {
        assert!(Op::Ne.eval_threshold_ordering(None));
        assert!(!Op::Eq.eval_threshold_ordering(None));
        assert!(!Op::Gt.eval_threshold_ordering(None));
        assert!(!Op::Lte.eval_threshold_ordering(None));
    }

    #[test]
    fn split_prefers_two_char_operators() {
        assert_eq!(Op::split_rule("1>=5"), Some(("1", Op::Gte, "5")));
        assert_eq!(Op::split_rule("1<=5"), Some(("1", Op::Lte, "5")));
        assert_eq!(Op::split_rule("1!=5"), Some(("1", Op::Ne, "5")));
        assert_eq!(Op::split_rule("2!/tds"), Some(("2", Op::NotContains, "tds")));
        assert_eq!(Op::split_rule("2/tds"), Some(("2", Op::Contains, "tds")));
        assert_eq!(Op::split_rule("1,3,4"), None);
    }

    #[test]
    fn split_keeps_the_rest_of_the_value() {
        assert_eq!(
            Op::split_rule("1>2014-07-30 12:00:00"),
            Some(("1", Op::Gt, "2014-07-30 12:00:00"))
        );
        assert_eq!(Op::split_rule("3=a=b"), Some(("3", Op::Eq, "a=b")));
    }

    #[test]
    fn op_display_and_parse() {
        for op in Op::PRIORITY {
            assert_eq!(op.to_string().parse::<Op>(), Ok(op));
        }
        assert!("~".parse::<Op>().is_err());
    }
}
