//! Reporting of files created by the site writer.

use std::path::{Component, Path};

/// What kind of file was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// An image resource in the image directory.
    Image,
    /// The document's markdown file.
    Markdown,
}

impl Artifact {
    /// Number of trailing path segments shown when reporting this artifact.
    pub fn display_segments(self) -> usize {
        match self {
            Artifact::Image => 3,
            Artifact::Markdown => 2,
        }
    }
}

/// Trait for receiving a notification for each file the writer creates.
pub trait WriteReporter {
    /// Called after `path` has been written.
    fn on_created(&mut self, path: &Path, artifact: Artifact);
}

/// A no-op reporter.
#[derive(Default)]
pub struct NoopReporter;

impl WriteReporter for NoopReporter {
    fn on_created(&mut self, _path: &Path, _artifact: Artifact) {}
}

impl<R: WriteReporter + ?Sized> WriteReporter for &mut R {
    fn on_created(&mut self, path: &Path, artifact: Artifact) {
        (**self).on_created(path, artifact);
    }
}

/// Returns the last `segments` components of `path`, joined with `/`.
///
/// ```
/// use std::path::Path;
/// use nbhugo::writer::shorten_path;
///
/// let path = Path::new("/site/static/posts/my-post/plot.png");
/// assert_eq!(shorten_path(path, 3), "posts/my-post/plot.png");
/// ```
pub fn shorten_path(path: &Path, segments: usize) -> String {
    let parts: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    let start = parts.len().saturating_sub(segments);
    parts[start..].join("/")
}

/// Formats the confirmation line for a created file.
pub fn created_message(path: &Path, artifact: Artifact) -> String {
    format!(
        "Created '{}'",
        shorten_path(path, artifact.display_segments())
    )
}
