//! Site layout modes and the path rules derived from them.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::name::{DocumentName, Section};

/// Directory holding generated markdown, relative to the site root.
pub const CONTENT_DIR: &str = "content";

/// Directory served verbatim by the site generator, relative to the site root.
pub const STATIC_DIR: &str = "static";

/// File name of the markdown page inside a page bundle.
pub const BUNDLE_INDEX: &str = "index.md";

/// Where a document's markdown and images are placed.
///
/// | Mode | image dir | markdown file |
/// |---|---|---|
/// | `PageBundle` | `content/<section>/<name>/` | `content/<section>/<name>/index.md` |
/// | `Flat` | `static/<section>/<name>/` | `content/<section>/<name>.md` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Markdown under `content/`, images under `static/`.
    #[default]
    Flat,
    /// Markdown and images together in one self-contained directory.
    PageBundle,
}

impl Layout {
    pub fn from_page_bundle(use_page_bundle: bool) -> Self {
        if use_page_bundle {
            Layout::PageBundle
        } else {
            Layout::Flat
        }
    }

    pub fn is_page_bundle(self) -> bool {
        matches!(self, Layout::PageBundle)
    }

    /// Directory that receives the document's image resources.
    pub fn image_dir(self, site_dir: &Path, section: &Section, name: &DocumentName) -> PathBuf {
        let root = match self {
            Layout::PageBundle => CONTENT_DIR,
            Layout::Flat => STATIC_DIR,
        };
        site_dir
            .join(root)
            .join(section.to_path())
            .join(name.as_str())
    }

    /// Path of the document's markdown file.
    pub fn markdown_file(
        self,
        site_dir: &Path,
        section: &Section,
        name: &DocumentName,
    ) -> PathBuf {
        let section_dir = site_dir.join(CONTENT_DIR).join(section.to_path());
        match self {
            Layout::PageBundle => section_dir.join(name.as_str()).join(BUNDLE_INDEX),
            // Not with_extension: names like "v1.2" must keep their dot.
            Layout::Flat => section_dir.join(format!("{}.md", name.as_str())),
        }
    }

    /// Computes both target locations at once.
    pub fn paths(self, site_dir: &Path, section: &Section, name: &DocumentName) -> SitePaths {
        SitePaths {
            layout: self,
            image_dir: self.image_dir(site_dir, section, name),
            markdown_file: self.markdown_file(site_dir, section, name),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Flat => write!(f, "flat"),
            Layout::PageBundle => write!(f, "page-bundle"),
        }
    }
}

/// The two on-disk locations of a converted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitePaths {
    pub layout: Layout,
    pub image_dir: PathBuf,
    pub markdown_file: PathBuf,
}
