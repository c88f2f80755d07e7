//! Command handlers for the CLI.

mod completions;
mod convert;
mod paths;

use std::path::Path;

use crate::writer::{Artifact, WriteReporter, created_message};

pub use completions::handle_completions;
pub use convert::handle_convert;
pub use paths::handle_paths;

// ===========================================
// Shared Utilities
// ===========================================

/// Reporter that prints a `Created '...'` line per file to stdout.
pub(crate) struct ConsoleReporter {
    enabled: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl WriteReporter for ConsoleReporter {
    fn on_created(&mut self, path: &Path, artifact: Artifact) {
        if self.enabled {
            println!("{}", created_message(path, artifact));
        }
    }
}
