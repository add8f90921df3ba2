//! End-to-end tests through the `Table` facade.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use dyntable::prelude::*;
use dyntable::{FilterError, RenderError};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Filtering on insert
// ============================================================================

#[test]
fn insert_filter_reorders_columns_and_drops_rows() {
    let filter = TableFilter::parse("1,3,4;1<2014-07-30 12:00:00").unwrap();
    let mut table = Table::buffered()
        .with_renderer(CsvRenderer::default())
        .with_filter(filter);
    table.set_column_names(["Col1", "Col2", "Col3", "Misc"]);

    // Not dates, so the date rule fails for them.
    assert!(!table.add_row(["abc", "blah", "boo", "stuff"]));
    assert!(!table.add_row(["def", "blah", "boo", "stuff"]));
    // Not strictly earlier than the threshold.
    assert!(!table.add_row(["2014-07-30 12:00:00", "a"]));
    assert!(!table.add_row(["2014-07-30 16:00:00", "b", "c"]));
    // Earlier.
    assert!(table.add_row(["2013-04-21 1:00:00", "x", "y", "z"]));
    assert!(table.add_row(["2014-07-30 08:00:00", "p"]));

    assert_eq!(table.model().col_names(), &["Col1", "Col3", "Misc"]);
    assert_eq!(table.len(), 2);

    table.render().unwrap();
    assert_eq!(
        table.buffer().unwrap(),
        "Col1,Col3,Misc\n2013-04-21 1:00:00,y,z\n2014-07-30 08:00:00,,\n"
    );
}

#[test]
fn greater_than_uses_cell_on_the_left() {
    let mut table = Table::buffered().with_renderer(CsvRenderer::default());
    table.set_filter_expr("1>2014-07-30 12:00:00").unwrap();
    assert!(table.add_row(["2014-07-30 16:00:00"]));
    assert!(!table.add_row(["2014-07-30 08:00:00"]));
}

#[test]
fn contains_rule_on_insert() {
    let mut table = Table::buffered();
    table.set_filter_expr("2/tds").unwrap();
    assert!(table.add_row(["1", "has_tds_inside"]));
    assert!(!table.add_row(["2", "nope"]));
    assert_eq!(table.len(), 1);
}

#[test]
fn filtered_copy_leaves_source_alone() {
    let mut table = Table::buffered().with_renderer(CsvRenderer::default());
    table.set_column_names(["a", "b", "c", "d", "e"]);
    table.add_row(["1", "2", "3", "4", "5"]);
    table.add_row(["6", "7", "8", "9", "10"]);

    let filter = TableFilter::parse("1,3-;1=6").unwrap();
    let mut filtered = table.filtered(&filter);
    filtered.render().unwrap();
    assert_eq!(filtered.buffer().unwrap(), "a,c,d,e\n6,8,9,10\n");
    assert_eq!(table.len(), 2);
    assert_eq!(table.buffer(), Some(""));
}

#[test]
fn filter_errors_surface() {
    let mut table = Table::buffered();
    let err = table.set_filter_expr("1,3-,5").unwrap_err();
    assert!(matches!(
        err,
        TableError::Filter(FilterError::InvalidColumnFilter { .. })
    ));
}

// ============================================================================
// Renderers
// ============================================================================

fn servers(table: &mut Table) {
    table.set_column_names(["Host", "State"]);
    table.add_row(Row::new(["web1", "up"]).with_colors(["", "green"]));
    table.add_row(
        Row::new(["db1", "down"])
            .with_colors(["", "red,bold"])
            .with_attrs(
                RowAttrs::new()
                    .with_row_attr("class=\"alert\"")
                    .with_cell_attrs(["", "title=\"paged\""]),
            ),
    );
}

#[test]
fn text_output() {
    let mut table = Table::buffered().with_renderer(
        TextRenderer::default()
            .indent(1)
            .padding(1)
            .color_disabled(true),
    );
    servers(&mut table);
    table.render().unwrap();
    assert_eq!(
        table.buffer().unwrap(),
        " ----------------\n \
         | Host | State |\n \
         ----------------\n \
         | web1 | up    |\n \
         | db1  | down  |\n \
         ----------------\n"
    );
}

#[test]
fn text_output_with_colors() {
    let mut table = Table::buffered();
    servers(&mut table);
    table.render().unwrap();
    let out = table.buffer().unwrap();
    assert!(out.contains("|web1|\x1b[92mup   \x1b[0m|\n"));
    assert!(out.contains("|db1 |\x1b[91m\x1b[1mdown \x1b[0m|\n"));
}

#[test]
fn html_output() {
    let mut table = Table::buffered().with_renderer(HtmlRenderer::default());
    servers(&mut table);
    table.render().unwrap();
    assert_eq!(
        table.buffer().unwrap(),
        "<table >\n\
         \x20 <thead >\n\
         \x20   <tr>\n\
         \x20     <th>Host</th><th>State</th>\n\
         \x20   </tr>\n\
         \x20 </thead>\n\
         \x20 <tbody >\n\
         \x20   <tr>\n\
         \x20     <td>web1</td><td><font color=\"green\">up</font></td>\n\
         \x20   </tr>\n\
         \x20   <tr class=\"alert\">\n\
         \x20     <td>db1</td><td title=\"paged\"><font color=\"red\"><b>down</b></font></td>\n\
         \x20   </tr>\n\
         \x20 </tbody>\n\
         </table>\n"
    );
}

#[test]
fn csv_output_ignores_colors_and_attrs() {
    let mut table = Table::buffered().with_renderer(CsvRenderer::default().separator(";"));
    servers(&mut table);
    table.render().unwrap();
    assert_eq!(table.buffer().unwrap(), "Host;State\nweb1;up\ndb1;down\n");
}

#[test]
fn switching_renderers_keeps_rows() {
    let mut table = Table::buffered();
    servers(&mut table);
    table.set_renderer_kind("csv").unwrap();
    assert_eq!(table.to_string(), "Host,State\nweb1,up\ndb1,down\n");
}

// ============================================================================
// Output sinks
// ============================================================================

#[test]
fn copies_share_a_writer() {
    let capture = Capture::default();
    let mut table = Table::with_writer(capture.clone()).with_renderer(CsvRenderer::default());
    table.add_row(["a"]);
    let mut copy = table.copy();
    copy.add_row(["b"]);

    table.render().unwrap();
    copy.render().unwrap();
    assert_eq!(capture.text(), "a\na\nb\n");
    assert_eq!(table.buffer(), None);
}

#[test]
fn writes_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    let file = fs::File::create(&path).unwrap();

    let mut table = Table::with_writer(file);
    table.add_row(["x", "y"]);
    table.render().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "-----\n|x|y|\n-----\n");
}

#[test]
fn adhoc_rows_grow_the_table() {
    let mut table = Table::buffered();
    table.set_column_names(["id"]);
    table.print_header().unwrap();
    table.print_row(["1", "extra"]).unwrap();
    table.print_row(Row::new(["22"]).with_colors(["red"])).unwrap();
    table.print_footer().unwrap();

    assert_eq!(table.model().col_count(), 2);
    assert_eq!(table.model().padded_names().as_ref(), &["id", ""]);
    assert!(table.is_empty());
    assert_eq!(
        table.buffer().unwrap(),
        "----\n|id|\n----\n|1 |extra|\n|\x1b[91m22\x1b[0m|     |\n----------\n"
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn table_from_yaml_config() {
    let yaml = r#"
renderer:
  format: text
  padding: 1
  fill_char: "."
columns: [Host, Role, State]
widths: [6, 2]
filter: "1,3;3=up"
"#;
    let config = TableConfig::from_yaml(yaml).unwrap();
    let mut table = Table::from_config(config, Output::buffer()).unwrap();
    table.add_row(["web1", "frontend", "up"]);
    table.add_row(["db1", "database", "down"]);
    table.render().unwrap();

    assert_eq!(
        table.buffer().unwrap(),
        "---------------\n\
         | Host.. | St |\n\
         ---------------\n\
         | web1.. | up |\n\
         ---------------\n"
    );
}

#[test]
fn widths_error_names_position() {
    let mut table = Table::buffered();
    let err = table.set_column_widths(["2", "", "wide"]).unwrap_err();
    assert!(matches!(
        err,
        TableError::Render(RenderError::InvalidColumnWidth { position: 3, .. })
    ));
}
