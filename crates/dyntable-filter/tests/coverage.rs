//! Public API coverage for the filter crate.

use dyntable_filter::{
    parse_datetime, parse_number, ColumnRule, FilterError, Op, RowRule, TableFilter, Timestamp,
    TypedValue, ValueKind,
};

// ============================================================================
// Expression parsing
// ============================================================================

#[test]
fn column_rule_then_row_rules() {
    let filter = TableFilter::parse("1,3-;1>2014-07-30 12:00:00").unwrap();

    let col_rule = filter.col_rule().unwrap();
    assert_eq!(col_rule.indices(), &[1]);
    assert_eq!(col_rule.open_from(), Some(3));

    let rule = &filter.row_rules()[0];
    assert_eq!(rule.column(), 1);
    assert_eq!(rule.op(), Op::Gt);
    assert_eq!(rule.value().kind(), ValueKind::Date);
}

#[test]
fn row_rules_only() {
    let filter = TableFilter::parse("4=Active;2/tds").unwrap();
    assert!(filter.col_rule().is_none());
    assert_eq!(
        filter
            .row_rules()
            .iter()
            .map(|r| r.op())
            .collect::<Vec<_>>(),
        vec![Op::Eq, Op::Contains]
    );
}

#[test]
fn every_operator_parses() {
    let cases = [
        ("1>=5", Op::Gte),
        ("1<=5", Op::Lte),
        ("1>5", Op::Gt),
        ("1<5", Op::Lt),
        ("1!=5", Op::Ne),
        ("1=5", Op::Eq),
        ("1!/5", Op::NotContains),
        ("1/5", Op::Contains),
    ];
    for (text, op) in cases {
        assert_eq!(RowRule::parse(text).unwrap().op(), op, "{}", text);
    }
}

#[test]
fn malformed_expressions_fail() {
    assert!(matches!(
        TableFilter::parse("1,3-,5;1=2"),
        Err(FilterError::InvalidColumnFilter { .. })
    ));
    assert!(matches!(
        TableFilter::parse("x=2"),
        Err(FilterError::InvalidRowFilter { .. })
    ));
    assert!(matches!(
        TableFilter::parse("1,2;3<hello"),
        Err(FilterError::InvalidOperatorForType {
            op: Op::Lt,
            value_type: "string",
            ..
        })
    ));
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn reversed_operand_convention_on_dates() {
    let filter = TableFilter::parse("1>2014-07-30 12:00:00").unwrap();
    assert!(filter.check_row(&["2014-07-30 16:00:00"]));
    assert!(!filter.check_row(&["2014-07-30 08:00:00"]));

    let filter = TableFilter::parse("1<2014-07-30 12:00:00").unwrap();
    assert!(filter.check_row(&["2014-07-30 08:00:00"]));
    assert!(filter.check_row(&["2013-04-21 1:00:00"]));
    assert!(!filter.check_row(&["2014-07-30 16:00:00"]));
}

#[test]
fn twelve_hour_threshold_is_a_date() {
    let filter = TableFilter::parse("1>Jul 30 2014 4:00PM").unwrap();
    assert!(filter.check_row(&["2014-07-30 17:30:00"]));
    assert!(filter.check_row(&["31/07/2014"]));
    assert!(!filter.check_row(&["2014-07-30 4pm"]));
    assert!(!filter.check_row(&["07/30/2014 11:00 AM"]));
}

#[test]
fn unparsable_cells_fail_quietly() {
    let filter = TableFilter::parse("1<2014-07-30 12:00:00").unwrap();
    assert!(!filter.check_row(&["abc"]));
    assert!(!filter.check_row(&[""]));

    let filter = TableFilter::parse("2>=3").unwrap();
    assert!(!filter.check_row(&["x", "three"]));
    assert!(!filter.check_row(&["x"]));
}

#[test]
fn contains_operator() {
    let filter = TableFilter::parse("2/tds").unwrap();
    assert!(filter.check_row(&["x", "has_tds_inside"]));
    assert!(!filter.check_row(&["x", "nope"]));

    let filter = TableFilter::parse("2!/tds").unwrap();
    assert!(!filter.check_row(&["x", "has_tds_inside"]));
    assert!(filter.check_row(&["x", "nope"]));
}

#[test]
fn numeric_equality() {
    let filter = TableFilter::parse("1=5").unwrap();
    assert!(filter.check_row(&["5"]));
    assert!(filter.check_row(&["5.0"]));
    assert!(!filter.check_row(&["6"]));
}

#[test]
fn owned_cells_work_too() {
    let filter = TableFilter::parse("1=abc").unwrap();
    let row: Vec<String> = vec!["abc".to_string()];
    assert!(filter.check_row(&row));
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn projection_examples() {
    let row = ["a", "b", "c", "d", "e"];

    let cases = [
        ("1,3-", vec!["a", "c", "d", "e"]),
        ("4-", vec!["d", "e"]),
        ("2-4", vec!["b", "c", "d"]),
        ("5,1", vec!["e", "a"]),
        ("1,7,2", vec!["a", "b"]),
        ("9-", vec![]),
    ];
    for (text, expected) in cases {
        let filter = TableFilter::parse(text).unwrap();
        assert_eq!(filter.filter_columns(&row), expected, "{}", text);
    }
}

#[test]
fn projection_works_on_any_clone_type() {
    let rule = ColumnRule::new(vec![2], Some(3));
    assert_eq!(rule.project(&[10, 20, 30, 40]), vec![20, 30, 40]);
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn value_helpers() {
    assert_eq!(parse_number("3.5"), Some(3.5));
    assert_eq!(parse_number("x"), None);
    assert_eq!(parse_datetime("1970-01-01 00:00:10"), Some(Timestamp(10)));
    assert_eq!(Timestamp::from(10).as_secs(), 10);
    assert_eq!(TypedValue::infer("x").kind().to_string(), "string");
}

#[test]
fn building_rules_by_hand() {
    let mut filter = TableFilter::new();
    filter.push_row_rule(RowRule::new(1, Op::Gte, TypedValue::Number(2.0)).unwrap());
    assert!(filter.check_row(&["2"]));
    assert!(!filter.check_row(&["1"]));

    let contains = RowRule::new(1, Op::Contains, TypedValue::Number(20.0)).unwrap();
    assert_eq!(contains.value(), &TypedValue::String("20".to_string()));
    assert!(contains.matches(&["2014"]));
}
