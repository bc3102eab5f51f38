//! Where the brand list text comes from.
//!
//! PDF extraction happens upstream; sources here hand over plain text.

use boikot_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Provider of raw brand list text.
pub trait DocumentSource {
    /// Short description for logs and messages.
    fn describe(&self) -> String;

    /// Read the full text.
    fn load(&self) -> Result<String>;
}

/// UTF-8 text file produced by the PDF text extraction step.
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    /// Source backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for TextFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(&self.path).with_source(e),
            _ => Error::from(e).with_context(format!("While reading {}", self.path.display())),
        })?;

        String::from_utf8(bytes).map_err(|e| Error::invalid_encoding(&self.path).with_source(e))
    }
}

/// Text already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InlineText {
    text: String,
}

impl InlineText {
    /// Wrap `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for InlineText {
    fn describe(&self) -> String {
        format!("<inline text, {} bytes>", self.text.len())
    }

    fn load(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
