//! The [`Table`] facade.

use std::fmt::{self, Display};
use std::io::Write;

use dyntable_filter::TableFilter;
use dyntable_render::{Renderer, RendererKind, Row, TableModel, TextRenderer};
use tracing::debug;

use crate::error::Result;
use crate::output::Output;

/// A dynamic table: a model, a renderer and an output sink.
///
/// Rows can be added with any number of cells; the table grows to fit.
/// [`Table::render`] prints everything stored. Rows can also be printed one
/// at a time without storing them with [`Table::print_header`],
/// [`Table::print_row`] and [`Table::print_footer`].
///
/// # Example
///
/// ```rust
/// use dyntable::Table;
///
/// let mut table = Table::buffered();
/// table.set_column_names(["Name", "Age"]);
/// table.add_row(["alice", "31"]);
/// table.add_row(["bob"]);
/// table.render().unwrap();
///
/// assert_eq!(
///     table.buffer().unwrap(),
///     "-----------\n\
///      |Name |Age|\n\
///      -----------\n\
///      |alice|31 |\n\
///      |bob  |   |\n\
///      -----------\n"
/// );
/// ```
#[derive(Debug)]
pub struct Table {
    model: TableModel,
    renderer: Box<dyn Renderer>,
    output: Output,
}

impl Table {
    /// A text table writing to standard output.
    pub fn new() -> Self {
        Table::with_output(Output::stdout())
    }

    /// A text table collecting its output in memory.
    pub fn buffered() -> Self {
        Table::with_output(Output::buffer())
    }

    /// A text table writing to `writer`.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Table::with_output(Output::writer(writer))
    }

    /// A text table with the given output.
    pub fn with_output(output: Output) -> Self {
        Table {
            model: TableModel::new(),
            renderer: Box::new(TextRenderer::default()),
            output,
        }
    }

    /// Replaces the renderer.
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Attaches an insert filter.
    pub fn with_filter(mut self, filter: TableFilter) -> Self {
        self.model.set_filter(Some(filter));
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        debug!(renderer = %renderer.kind(), "renderer attached");
        self.renderer = renderer;
    }

    /// Switches to a default renderer by name (`text`, `csv` or `html`).
    pub fn set_renderer_kind(&mut self, name: &str) -> Result<()> {
        let kind: RendererKind = name.parse()?;
        self.set_renderer(kind.default_renderer());
        Ok(())
    }

    /// Attaches or detaches the insert filter.
    pub fn set_filter(&mut self, filter: Option<TableFilter>) {
        self.model.set_filter(filter);
    }

    /// Parses and attaches an insert filter.
    pub fn set_filter_expr(&mut self, expr: &str) -> Result<()> {
        self.model.set_filter(Some(TableFilter::parse(expr)?));
        Ok(())
    }

    pub fn set_column_names<I, T>(&mut self, names: I)
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.model.set_column_names(names);
    }

    /// Sets static widths; blank or `0` means auto.
    pub fn set_column_widths<I, W>(&mut self, widths: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: Display,
    {
        self.model.set_column_widths(widths)?;
        Ok(())
    }

    /// Stores a row. Returns `false` if the insert filter dropped it.
    pub fn add_row(&mut self, row: impl Into<Row>) -> bool {
        self.model.add_row(row)
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Renders the whole table to the output.
    pub fn render(&mut self) -> Result<()> {
        self.model.reconcile_names();
        let text = self.renderer.print_table(&self.model);
        self.output.write_text(&text)
    }

    /// Prints only the header.
    pub fn print_header(&mut self) -> Result<()> {
        self.model.reconcile_names();
        let text = self.renderer.print_header(&self.model);
        self.output.write_text(&text)
    }

    /// Prints a row without storing it. The table's geometry still grows
    /// to fit the row.
    pub fn print_row(&mut self, row: impl Into<Row>) -> Result<()> {
        let text = self.renderer.print_adhoc_row(&mut self.model, row.into());
        self.output.write_text(&text)
    }

    /// Prints only the footer.
    pub fn print_footer(&mut self) -> Result<()> {
        let text = self.renderer.print_footer(&self.model);
        self.output.write_text(&text)
    }

    /// The buffered output, or `None` when writing to a writer.
    pub fn buffer(&self) -> Option<&str> {
        self.output.contents()
    }

    /// Empties the buffered output.
    pub fn clear_buffer(&mut self) {
        self.output.clear();
    }

    // =========================================================================
    // Copies
    // =========================================================================

    /// A deep copy of the rows and geometry with a cloned renderer.
    ///
    /// A writer output is shared with the copy; a buffered copy starts with
    /// an empty buffer.
    pub fn copy(&self) -> Table {
        Table {
            model: self.model.clone(),
            renderer: self.renderer.clone(),
            output: self.output.share(),
        }
    }

    /// A new table with only the rows passing `filter`, projected through
    /// its column rule. Renderer and output are handled as in
    /// [`Table::copy`].
    pub fn filtered(&self, filter: &TableFilter) -> Table {
        Table {
            model: self.model.filter_table(filter),
            renderer: self.renderer.clone(),
            output: self.output.share(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

/// The rendered table, as [`Table::render`] would print it.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.renderer.print_table(&self.model))
    }
}
