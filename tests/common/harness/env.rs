//! Isolated test environment with temp directory.

use super::{NbCommand, TestNotebook};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for `jupyter nbconvert`, run as `sh -c SCRIPT notebook output_dir name`.
const EXPORTER_SCRIPT: &str = r#"
set -e
if grep -q '^FAIL' "$0"; then echo "invalid notebook: $0" >&2; exit 1; fi
cp "$0" "$1/$2.md"
assets="${0%.*}_assets"
if [ -d "$assets" ]; then mkdir -p "$1/$2_files"; cp "$assets"/* "$1/$2_files/"; fi
"#;

/// Isolated test environment with a site root, a notebooks directory and a
/// config file pointing at the stand-in exporter.
///
/// Everything lives in a temp directory that is removed on drop. The site
/// root itself is not created up front so tests can check that conversion
/// creates it.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        std::fs::create_dir_all(root.join("notebooks")).expect("Failed to create notebooks dir");

        let env = Self {
            _temp_dir: temp_dir,
            root,
        };
        env.write_settings("");
        env
    }

    /// Returns the path of the site root.
    pub fn site_dir(&self) -> PathBuf {
        self.root.join("site")
    }

    /// Returns a path below the site root.
    pub fn site_file(&self, relative: &str) -> PathBuf {
        self.site_dir().join(relative)
    }

    pub fn notebooks_dir(&self) -> PathBuf {
        self.root.join("notebooks")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Rewrites the config file with top-level `settings` (TOML) followed by
    /// the exporter table.
    pub fn write_settings(&self, settings: &str) {
        let contents = format!(
            "{settings}\n[exporter]\ncommand = \"sh\"\nargs = ['-c', '''{EXPORTER_SCRIPT}''', '{{notebook}}', '{{output_dir}}', '{{name}}']\n"
        );
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Writes the notebook (and its assets) and returns the notebook path.
    pub fn add_notebook(&self, notebook: &TestNotebook) -> PathBuf {
        let path = self.notebooks_dir().join(notebook.file_name());
        std::fs::write(&path, notebook.get_body()).expect("Failed to write notebook");

        if !notebook.images().is_empty() {
            let assets = self
                .notebooks_dir()
                .join(format!("{}_assets", notebook.stem()));
            std::fs::create_dir_all(&assets).expect("Failed to create assets dir");
            for (name, bytes) in notebook.images() {
                std::fs::write(assets.join(name), bytes).expect("Failed to write asset");
            }
        }
        path
    }

    /// Command with `--config` and `--site-dir` set for this environment.
    pub fn cmd(&self) -> NbCommand {
        self.bare_cmd().site_dir(&self.site_dir())
    }

    /// Command with only `--config` set, so the site dir comes from config.
    pub fn bare_cmd(&self) -> NbCommand {
        NbCommand::new().config(&self.config_path())
    }

    /// Returns the root of the environment.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_layout() {
        let env = TestEnv::new();
        assert!(env.notebooks_dir().is_dir());
        assert!(env.config_path().is_file());
        assert!(!env.site_dir().exists(), "site dir is created by conversion");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_config_parses() {
        let env = TestEnv::new();
        env.write_settings("section = \"notes\"");
        let config = nbhugo::cli::config::Config::load(Some(&env.config_path())).unwrap();
        assert_eq!(config.section.as_deref(), Some("notes"));
        assert_eq!(config.exporter().command, "sh");
        assert_eq!(config.exporter().args.len(), 5);
    }

    #[test]
    fn test_add_notebook_writes_assets() {
        let env = TestEnv::new();
        let nb = TestNotebook::new("plots").image("fig.png", b"png".to_vec());
        let path = env.add_notebook(&nb);

        assert!(path.ends_with("plots.ipynb"));
        assert!(env.notebooks_dir().join("plots_assets/fig.png").is_file());
    }
}
