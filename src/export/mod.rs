//! Notebook exporters.
//!
//! An exporter turns a notebook file into markdown text plus a
//! [`Resources`] bundle. Parsing and rendering notebooks is entirely the
//! exporter's business; the site writer only places what comes back.

mod command;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tempfile::TempDir;
use thiserror::Error;

use crate::domain::Resources;

pub use command::{CommandExporter, DEFAULT_ARGS, DEFAULT_COMMAND, ExporterConfig};

/// Errors raised while building or running an exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid exporter configuration: {0}")]
    InvalidConfig(String),

    #[error("notebook not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to launch exporter '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("exporter '{command}' failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("exporter produced no markdown at {path}")]
    MissingMarkdown { path: PathBuf },

    #[error("exporter output is not valid UTF-8: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("exporter I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The result of exporting one notebook.
#[derive(Debug)]
pub struct Exported {
    pub markdown: String,
    pub resources: Resources,
    /// Keeps files referenced from `resources.images_path` alive until the
    /// export is dropped.
    scratch: Option<TempDir>,
}

impl Exported {
    pub fn new(markdown: impl Into<String>, resources: Resources) -> Self {
        Self {
            markdown: markdown.into(),
            resources,
            scratch: None,
        }
    }

    /// Ties the lifetime of a scratch directory to this export.
    pub fn with_scratch(mut self, scratch: TempDir) -> Self {
        self.scratch = Some(scratch);
        self
    }

    /// Directory holding exporter-produced files, if any.
    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch.as_ref().map(TempDir::path)
    }
}

/// Converts a notebook file into markdown and resources.
pub trait Exporter {
    fn export(&self, notebook: &Path) -> Result<Exported, ExportError>;
}

impl<E: Exporter + ?Sized> Exporter for &E {
    fn export(&self, notebook: &Path) -> Result<Exported, ExportError> {
        (**self).export(notebook)
    }
}

impl<E: Exporter + ?Sized> Exporter for Box<E> {
    fn export(&self, notebook: &Path) -> Result<Exported, ExportError> {
        (**self).export(notebook)
    }
}
