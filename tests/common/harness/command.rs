//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `nbhugo` binary.
pub struct NbCommand {
    args: Vec<String>,
    /// Subcommand options appended after everything else.
    trailing: Vec<String>,
}

impl NbCommand {
    /// Creates a new command for the `nbhugo` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            trailing: Vec::new(),
        }
    }

    /// Sets the `--config` option.
    pub fn config(self, path: &Path) -> Self {
        self.args(["--config".to_string(), path.to_string_lossy().to_string()])
    }

    /// Sets the `--site-dir` option.
    ///
    /// It belongs to the subcommand, so it is passed after the subcommand
    /// and its arguments.
    pub fn site_dir(mut self, path: &Path) -> Self {
        self.trailing = vec!["--site-dir".to_string(), path.to_string_lossy().to_string()];
        self
    }

    /// Sets the `--section` option.
    pub fn section(self, section: &str) -> Self {
        self.args(["--section", section])
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("nbhugo").expect("Failed to find nbhugo binary");
        cmd.args(&self.args).args(&self.trailing);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `convert` command with the given notebooks.
    pub fn convert<P: AsRef<Path>>(self, notebooks: &[P]) -> Self {
        let mut cmd = self.args(["convert"]);
        for nb in notebooks {
            cmd = cmd.args([nb.as_ref().to_string_lossy().to_string()]);
        }
        cmd
    }

    /// Configures for the `paths` command with a document name.
    pub fn paths(self, name: &str) -> Self {
        self.args(["paths", name])
    }

    // ===========================================
    // Layout and Format Options
    // ===========================================

    /// Adds `--page-bundle` to the command.
    pub fn page_bundle(self) -> Self {
        self.args(["--page-bundle"])
    }

    /// Adds `--flat` to the command.
    pub fn flat(self) -> Self {
        self.args(["--flat"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for NbCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        NbCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = NbCommand::new().args(["--help"]).output_success();
        assert!(output.contains("convert"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NbCommand::new().paths("post").page_bundle().format_json();
        assert_eq!(
            cmd.get_args(),
            ["paths", "post", "--page-bundle", "--format", "json"]
        );
    }

    #[test]
    fn test_site_dir_follows_subcommand() {
        let dir = tempfile::TempDir::new().unwrap();
        NbCommand::new()
            .site_dir(dir.path())
            .paths("post")
            .assert()
            .success();
    }
}
