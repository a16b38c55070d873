//! Destinations for exported snippet text

use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Accepts a file name and a text payload to hand to the user
pub trait ExportSink {
    /// Deliver `payload` under `filename`, returning where it went
    fn deliver(&mut self, filename: &str, payload: &str) -> Result<String>;
}

/// Writes the export as a file inside a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        DirectorySink { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, filename: &str, payload: &str) -> Result<String> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.dir.join(filename);
        fs::write(&path, payload)?;

        info!(path = %path.display(), bytes = payload.len(), "exported snippets");
        Ok(path.display().to_string())
    }
}

/// Streams the export to any writer, e.g. stdout
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn deliver(&mut self, filename: &str, payload: &str) -> Result<String> {
        self.writer.write_all(payload.as_bytes())?;
        self.writer.flush()?;
        Ok(format!("<stream:{}>", filename))
    }
}
