//! Where rendered text goes.
//!
//! A table writes either to a shared [`Write`] sink or to an in-memory
//! buffer. The mode is fixed when the table is created.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::error::{Result, TableError};

/// A writer that can be shared between a table and its copies.
#[derive(Clone)]
pub struct SharedWriter(Arc<Mutex<Box<dyn Write + Send>>>);

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        SharedWriter(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Returns `true` if both handles write to the same sink.
    pub fn same_sink(&self, other: &SharedWriter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn write_str(&self, text: &str) -> Result<()> {
        let mut guard = self.0.lock().map_err(|_| TableError::OutputPoisoned)?;
        guard.write_all(text.as_bytes())?;
        guard.flush()?;
        Ok(())
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedWriter").finish_non_exhaustive()
    }
}

/// Output sink of a table.
#[derive(Debug)]
pub enum Output {
    /// Text is written straight to the writer.
    Writer(SharedWriter),
    /// Text accumulates in memory until read or cleared.
    Buffer(String),
}

impl Output {
    /// Standard output.
    pub fn stdout() -> Self {
        Output::Writer(SharedWriter::new(io::stdout()))
    }

    /// An empty in-memory buffer.
    pub fn buffer() -> Self {
        Output::Buffer(String::new())
    }

    /// Any writer, e.g. a file.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Output::Writer(SharedWriter::new(writer))
    }

    /// Writes (or appends) `text`.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        trace!(bytes = text.len(), buffered = self.is_buffer(), "table output");
        match self {
            Output::Writer(writer) => writer.write_str(text),
            Output::Buffer(buf) => {
                buf.push_str(text);
                Ok(())
            }
        }
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self, Output::Buffer(_))
    }

    /// The buffered text; `None` for writer outputs.
    pub fn contents(&self) -> Option<&str> {
        match self {
            Output::Buffer(buf) => Some(buf),
            Output::Writer(_) => None,
        }
    }

    /// Empties the buffer. Writer outputs are unaffected.
    pub fn clear(&mut self) {
        if let Output::Buffer(buf) = self {
            buf.clear();
        }
    }

    /// The output a copied table gets: the same writer, or a fresh buffer.
    pub(crate) fn share(&self) -> Self {
        match self {
            Output::Writer(writer) => Output::Writer(writer.clone()),
            Output::Buffer(_) => Output::buffer(),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::stdout()
    }
}
