//! Renderers turn a [`TableModel`] into text.
//!
//! Every renderer implements [`Renderer`]. Each print operation returns the
//! produced text; writing it somewhere is the caller's business. A renderer
//! holds configuration only, never row data, so [`Renderer::boxed_clone`]
//! is cheap and a cloned renderer shares nothing with its source.
//!
//! | Renderer | Output |
//! |----------|--------|
//! | [`TextRenderer`] | bordered, padded plain text with terminal colors |
//! | [`CsvRenderer`] | separator-joined rows |
//! | [`HtmlRenderer`] | a `<table>` element |
//!
//! Renderers can also be built from configuration:
//!
//! ```rust
//! use dyntable_render::{RendererConfig, RendererKind};
//!
//! let config = RendererConfig::from_yaml("format: csv\nseparator: \";\"\n").unwrap();
//! let renderer = config.into_renderer();
//! assert_eq!(renderer.kind(), RendererKind::Csv);
//! ```

mod csv;
mod html;
mod text;

pub use self::csv::{CsvOptions, CsvRenderer};
pub use self::html::{HtmlOptions, HtmlRenderer};
pub use self::text::{TextOptions, TextRenderer};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::model::{Row, RowView, TableModel};

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    Text,
    Csv,
    Html,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Text => "text",
            RendererKind::Csv => "csv",
            RendererKind::Html => "html",
        }
    }

    /// A renderer of this kind with default options.
    pub fn default_renderer(self) -> Box<dyn Renderer> {
        match self {
            RendererKind::Text => Box::new(TextRenderer::default()),
            RendererKind::Csv => Box::new(CsvRenderer::default()),
            RendererKind::Html => Box::new(HtmlRenderer::default()),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RendererKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(RendererKind::Text),
            "csv" => Ok(RendererKind::Csv),
            "html" => Ok(RendererKind::Html),
            other => Err(RenderError::InvalidCollaborator(format!(
                "unknown renderer '{}', expected one of: text, csv, html",
                other
            ))),
        }
    }
}

/// A table output format.
///
/// Renderers read the model's geometry and never mutate it, except through
/// [`Renderer::print_adhoc_row`], which records the row's widths first.
pub trait Renderer: fmt::Debug + Send + Sync {
    fn kind(&self) -> RendererKind;

    /// The header block (names and surrounding framing).
    fn print_header(&self, model: &TableModel) -> String;

    /// One row, which must already be padded to the model's column count.
    fn print_row(&self, model: &TableModel, row: RowView<'_>) -> String;

    /// Every stored row, padded to the current column count.
    fn print_rows(&self, model: &TableModel) -> String;

    /// The closing block.
    fn print_footer(&self, _model: &TableModel) -> String {
        String::new()
    }

    /// The complete table.
    fn print_table(&self, model: &TableModel) -> String;

    /// Clones the configuration into a new boxed renderer.
    fn boxed_clone(&self) -> Box<dyn Renderer>;

    /// Prints a row that is not stored in the model.
    ///
    /// The row is padded and measured first so later output lines up with it.
    fn print_adhoc_row(&self, model: &mut TableModel, row: Row) -> String {
        let row = model.absorb_adhoc(row);
        self.print_row(model, row.view())
    }
}

impl Clone for Box<dyn Renderer> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Renderer configuration, tagged by `format`.
///
/// ```yaml
/// format: text
/// indent: 2
/// padding: 1
/// ```
///
/// Omitted options take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum RendererConfig {
    Text(TextOptions),
    Csv(CsvOptions),
    Html(HtmlOptions),
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig::Text(TextOptions::default())
    }
}

impl RendererConfig {
    /// Parses a configuration from YAML (or JSON).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn kind(&self) -> RendererKind {
        match self {
            RendererConfig::Text(_) => RendererKind::Text,
            RendererConfig::Csv(_) => RendererKind::Csv,
            RendererConfig::Html(_) => RendererKind::Html,
        }
    }

    /// Builds the configured renderer.
    pub fn into_renderer(self) -> Box<dyn Renderer> {
        match self {
            RendererConfig::Text(opts) => Box::new(TextRenderer::new(opts)),
            RendererConfig::Csv(opts) => Box::new(CsvRenderer::new(opts)),
            RendererConfig::Html(opts) => Box::new(HtmlRenderer::new(opts)),
        }
    }
}
