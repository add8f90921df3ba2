//! Property-based tests for the `Table` facade using proptest.

use dyntable::prelude::*;
use proptest::prelude::*;

fn rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[0-9]{1,3}|[a-z]{0,4}", 0..6), 0..12)
}

fn filled(rows: &[Vec<String>], renderer: &str) -> Table {
    let mut table = Table::buffered();
    table.set_renderer_kind(renderer).unwrap();
    for row in rows {
        table.add_row(row.clone());
    }
    table
}

proptest! {
    /// The insert filter keeps exactly the rows its row rules accept.
    #[test]
    fn insert_filter_matches_check_row(rows in rows(), threshold in 0u32..500) {
        let expr = format!("1>={}", threshold);
        let filter = TableFilter::parse(&expr).unwrap();
        let expected = rows.iter().filter(|row| filter.check_row(row)).count();

        let mut table = Table::buffered().with_filter(filter);
        let accepted = rows.iter().filter(|row| table.add_row((*row).clone())).count();

        prop_assert_eq!(accepted, expected);
        prop_assert_eq!(table.len(), expected);
    }

    /// Filtering a stored table agrees with filtering on insert.
    #[test]
    fn filtered_copy_equals_insert_filter(rows in rows(), threshold in 0u32..500) {
        let filter = TableFilter::parse(&format!("1<{}", threshold)).unwrap();
        let source = filled(&rows, "csv");
        let copied = source.filtered(&filter);

        let mut inserted = Table::buffered().with_filter(filter);
        inserted.set_renderer_kind("csv").unwrap();
        for row in &rows {
            inserted.add_row(row.clone());
        }

        prop_assert_eq!(copied.len(), inserted.len());
        prop_assert_eq!(source.len(), rows.len());
    }

    /// A copy renders the same text as its source, for every renderer.
    #[test]
    fn copy_renders_identically(
        rows in rows(),
        renderer in prop::sample::select(vec!["text", "csv", "html"]),
    ) {
        let table = filled(&rows, renderer);
        let copy = table.copy();
        prop_assert_eq!(table.to_string(), copy.to_string());
    }

    /// Rendering into the buffer produces exactly the `Display` text.
    #[test]
    fn render_writes_display_text(rows in rows()) {
        let mut table = filled(&rows, "text");
        let shown = table.to_string();
        table.render().unwrap();
        prop_assert_eq!(table.buffer(), Some(shown.as_str()));
    }
}
