//! Filesystem primitives used to materialize site files.

use filetime::FileTime;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during file system operations on site files.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Creates `dir` and any missing parents.
///
/// Succeeds if the directory already exists.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if `dir` exists as a file.
/// Returns `FsError::CreateDir` if creation fails for any other reason.
pub fn ensure_dir(dir: &Path) -> Result<(), FsError> {
    if dir.is_file() {
        return Err(FsError::NotADirectory { path: dir.into() });
    }
    fs::create_dir_all(dir).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: dir.into() },
        _ => FsError::CreateDir {
            path: dir.into(),
            source: e,
        },
    })
}

/// Creates the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<(), FsError> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => ensure_dir(parent),
        None => Ok(()),
    }
}

/// Writes `contents` to `path` atomically, replacing any existing file.
///
/// The bytes go to a temp file next to `path` which is then renamed over it,
/// so readers never see a half-written file. A replaced file keeps its
/// permissions; a new one gets `0644` on Unix.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;
    temp.write_all(contents).map_err(|e| FsError::from_io(path, e))?;

    if let Some(permissions) = target_permissions(path) {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::from_io(path, e))?;
    }

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Permissions the file at `path` should end up with after a rewrite.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Copies `source` to `target`, replacing any existing file, and carries the
/// permission bits and access/modification times over.
///
/// An existing target file is unlinked first, so a read-only copy left by an
/// earlier run does not block the next one.
///
/// # Errors
///
/// Returns `FsError::NotFound` (naming `source`) if the source is missing.
/// Returns `FsError::PermissionDenied` (naming `target`) if the target cannot
/// be replaced.
/// Returns `FsError::Copy` if the copy fails for any other reason.
/// Returns `FsError::Io` (naming `target`) if the timestamps cannot be set.
pub fn copy_preserving(source: &Path, target: &Path) -> Result<(), FsError> {
    let metadata = fs::metadata(source).map_err(|e| FsError::from_io(source, e))?;
    if metadata.is_dir() {
        return Err(FsError::Io {
            path: source.into(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "source is a directory"),
        });
    }

    // Copying a file onto itself would unlink the source.
    if is_same_file(source, target) {
        return Ok(());
    }

    if fs::symlink_metadata(target).is_ok_and(|m| !m.is_dir()) {
        fs::remove_file(target).map_err(|e| FsError::from_io(target, e))?;
    }

    // fs::copy carries permission bits; timestamps are set separately.
    fs::copy(source, target).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
            path: target.into(),
        },
        _ => FsError::Copy {
            from: source.into(),
            to: target.into(),
            source: e,
        },
    })?;

    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, atime, mtime).map_err(|e| FsError::from_io(target, e))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
