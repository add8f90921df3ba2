//! Rows and their side channels.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A row of cells with optional per-cell colors and renderer attributes.
///
/// Colors may be shorter than the cells; missing entries mean "no color".
///
/// ```rust
/// use dyntable_render::{Row, RowAttrs};
///
/// let row = Row::new(["a", "b"])
///     .with_colors(["red"])
///     .with_attrs(RowAttrs::new().with_row_attr("class=\"hot\""));
///
/// assert_eq!(row.cells(), &["a", "b"]);
/// assert_eq!(row.colors(), &["red"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<String>,
    colors: Vec<String>,
    attrs: Option<RowAttrs>,
}

impl Row {
    /// Creates a row, converting every cell to text.
    pub fn new<I, T>(cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Row {
            cells: cells.into_iter().map(|c| c.to_string()).collect(),
            colors: Vec::new(),
            attrs: None,
        }
    }

    /// Sets per-cell color specs.
    pub fn with_colors<I, T>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets renderer attributes.
    pub fn with_attrs(mut self, attrs: RowAttrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn attrs(&self) -> Option<&RowAttrs> {
        self.attrs.as_ref()
    }

    /// Borrows this row for rendering.
    pub fn view(&self) -> RowView<'_> {
        RowView {
            cells: &self.cells,
            colors: &self.colors,
            attrs: self.attrs.as_ref(),
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<String>, Option<RowAttrs>) {
        (self.cells, self.colors, self.attrs)
    }

    pub(crate) fn from_parts(
        cells: Vec<String>,
        colors: Vec<String>,
        attrs: Option<RowAttrs>,
    ) -> Self {
        Row {
            cells,
            colors,
            attrs,
        }
    }
}

impl<T: ToString> From<Vec<T>> for Row {
    fn from(cells: Vec<T>) -> Self {
        Row::new(cells)
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for Row {
    fn from(cells: [T; N]) -> Self {
        Row::new(cells)
    }
}

/// A borrowed row as seen by a renderer.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub cells: &'a [String],
    pub colors: &'a [String],
    pub attrs: Option<&'a RowAttrs>,
}

impl<'a> RowView<'a> {
    /// A view with only cells.
    pub fn plain(cells: &'a [String]) -> Self {
        RowView {
            cells,
            colors: &[],
            attrs: None,
        }
    }
}

/// Renderer-specific attributes attached to a row.
///
/// An open string to value map. The HTML renderer reads two keys:
/// [`RowAttrs::HTML_ROW_ATTR`] (a string placed in the `<tr>` tag) and
/// [`RowAttrs::HTML_CELL_ATTR`] (a list of strings, one per cell tag).
/// Other renderers ignore the bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowAttrs(Map<String, Value>);

impl RowAttrs {
    pub const HTML_ROW_ATTR: &'static str = "html_row_attr";
    pub const HTML_CELL_ATTR: &'static str = "html_cell_attr";

    pub fn new() -> Self {
        RowAttrs::default()
    }

    /// Sets the HTML row attribute string.
    pub fn with_row_attr(mut self, attr: impl Into<String>) -> Self {
        self.0
            .insert(Self::HTML_ROW_ATTR.to_string(), Value::String(attr.into()));
        self
    }

    /// Sets the HTML per-cell attribute strings.
    pub fn with_cell_attrs<I, T>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let list = attrs
            .into_iter()
            .map(|a| Value::String(a.into()))
            .collect();
        self.0
            .insert(Self::HTML_CELL_ATTR.to_string(), Value::Array(list));
        self
    }

    /// Inserts an arbitrary key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The HTML row attribute, if present and a non-empty string.
    pub fn row_attr(&self) -> Option<&str> {
        self.0
            .get(Self::HTML_ROW_ATTR)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The HTML attribute for cell `index`, if present and a non-empty string.
    pub fn cell_attr(&self, index: usize) -> Option<&str> {
        self.0
            .get(Self::HTML_CELL_ATTR)
            .and_then(Value::as_array)
            .and_then(|list| list.get(index))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

impl From<Map<String, Value>> for RowAttrs {
    fn from(map: Map<String, Value>) -> Self {
        RowAttrs(map)
    }
}
