//! Filesystem I/O for site files

mod fs;

pub use fs::{FsError, copy_preserving, ensure_dir, ensure_parent, write_file};
