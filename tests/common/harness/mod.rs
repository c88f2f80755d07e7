//! Test harness for CLI integration tests.
//!
//! Provides isolated site directories, a stand-in exporter that needs no
//! Jupyter install, and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod notebook;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NbCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use notebook::TestNotebook;
