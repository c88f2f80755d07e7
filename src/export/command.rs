//! Exporter that shells out to an external converter such as `jupyter nbconvert`.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use walkdir::WalkDir;

use super::{ExportError, Exported, Exporter};
use crate::domain::Resources;

/// Default converter program.
pub const DEFAULT_COMMAND: &str = "jupyter";

/// Default converter arguments.
pub const DEFAULT_ARGS: &[&str] = &[
    "nbconvert",
    "--to",
    "markdown",
    "--output-dir",
    "{output_dir}",
    "--output",
    "{name}",
    "{notebook}",
];

const NOTEBOOK: &str = "{notebook}";
const OUTPUT_DIR: &str = "{output_dir}";
const NAME: &str = "{name}";

/// How to invoke the external converter.
///
/// `args` may use three placeholders:
/// - `{notebook}`: path of the notebook being converted
/// - `{output_dir}`: scratch directory the converter must write into
/// - `{name}`: document name (the notebook's file stem)
///
/// The converter must leave `<output_dir>/<name>.md` behind. Every other file
/// it writes below `output_dir` is treated as an image resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            args: DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Runs an external command to export notebooks.
#[derive(Debug, Clone)]
pub struct CommandExporter {
    config: ExporterConfig,
}

impl CommandExporter {
    /// Builds an exporter, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidConfig` if the command is blank or the
    /// arguments never mention `{notebook}` or `{output_dir}`.
    pub fn new(config: ExporterConfig) -> Result<Self, ExportError> {
        if config.command.trim().is_empty() {
            return Err(ExportError::InvalidConfig(
                "exporter command is empty".to_string(),
            ));
        }
        for placeholder in [NOTEBOOK, OUTPUT_DIR] {
            if !config.args.iter().any(|a| a.contains(placeholder)) {
                return Err(ExportError::InvalidConfig(format!(
                    "exporter arguments must reference {placeholder}"
                )));
            }
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    fn expand_args(&self, notebook: &Path, output_dir: &Path, name: &str) -> Vec<OsString> {
        self.config
            .args
            .iter()
            .map(|arg| match arg.as_str() {
                // Whole-argument placeholders keep non-UTF-8 paths intact.
                NOTEBOOK => notebook.as_os_str().to_owned(),
                OUTPUT_DIR => output_dir.as_os_str().to_owned(),
                _ => arg
                    .replace(NOTEBOOK, &notebook.to_string_lossy())
                    .replace(OUTPUT_DIR, &output_dir.to_string_lossy())
                    .replace(NAME, name)
                    .into(),
            })
            .collect()
    }
}

impl Exporter for CommandExporter {
    fn export(&self, notebook: &Path) -> Result<Exported, ExportError> {
        if !notebook.is_file() {
            return Err(ExportError::NotFound {
                path: notebook.into(),
            });
        }
        let name = notebook
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let scratch = TempDir::new()?;
        let args = self.expand_args(notebook, scratch.path(), &name);

        let output = Command::new(&self.config.command)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ExportError::Launch {
                command: self.config.command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ExportError::Failed {
                command: self.config.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let markdown_path = scratch.path().join(format!("{name}.md"));
        let bytes = fs::read(&markdown_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExportError::MissingMarkdown {
                path: markdown_path.clone(),
            },
            _ => ExportError::Io(e),
        })?;
        let markdown = String::from_utf8(bytes).map_err(|_| ExportError::InvalidEncoding {
            path: markdown_path.clone(),
        })?;

        let images = collect_files(scratch.path(), &markdown_path)?;
        let mut resources = Resources::named(name);
        if !images.is_empty() {
            resources.images_path = Some(images);
        }

        Ok(Exported::new(markdown, resources).with_scratch(scratch))
    }
}

/// Lists every file below `root` except `skip`, keyed by its `/`-joined
/// path relative to `root`.
fn collect_files(root: &Path, skip: &Path) -> Result<BTreeMap<String, PathBuf>, ExportError> {
    let mut files = BTreeMap::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() || entry.path() == skip {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let key = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.insert(key, entry.path().to_path_buf());
    }
    Ok(files)
}
