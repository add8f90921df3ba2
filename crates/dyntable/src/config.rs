//! YAML table configuration.
//!
//! ```yaml
//! renderer:
//!   format: text
//!   padding: 1
//! columns: [Host, Role, State]
//! widths: [10, 5]
//! filter: "1,3;3=up"
//! ```
//!
//! Every key is optional.

use std::fmt;

use dyntable_filter::TableFilter;
use dyntable_render::{RenderError, RendererConfig};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::Output;
use crate::table::Table;

/// A static width as written in configuration: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for WidthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthValue::Number(n) => write!(f, "{}", n),
            WidthValue::Text(s) => f.write_str(s),
        }
    }
}

/// Declarative table setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub renderer: RendererConfig,
    pub columns: Vec<String>,
    pub widths: Vec<WidthValue>,
    /// Insert filter expression.
    pub filter: Option<String>,
}

impl TableConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(RenderError::from)
            .map_err(Into::into)
    }
}

impl Table {
    /// Builds a table from configuration.
    ///
    /// The filter is attached before the column names are set, so the names
    /// are projected through it.
    ///
    /// ```rust
    /// use dyntable::{Output, Table, TableConfig};
    ///
    /// let config = TableConfig::from_yaml(
    ///     "renderer: {format: csv}\ncolumns: [a, b, c]\nfilter: \"3,1\"\n",
    /// ).unwrap();
    /// let mut table = Table::from_config(config, Output::buffer()).unwrap();
    /// table.add_row(["1", "2", "3"]);
    /// table.render().unwrap();
    /// assert_eq!(table.buffer(), Some("c,a\n3,1\n"));
    /// ```
    pub fn from_config(config: TableConfig, output: Output) -> Result<Table> {
        let mut table = Table::with_output(output);
        if let Some(expr) = config.filter.as_deref() {
            table.set_filter(Some(TableFilter::parse(expr)?));
        }
        table.set_renderer(config.renderer.into_renderer());
        if !config.widths.is_empty() {
            table.set_column_widths(&config.widths)?;
        }
        if !config.columns.is_empty() {
            table.set_column_names(&config.columns);
        }
        Ok(table)
    }
}
