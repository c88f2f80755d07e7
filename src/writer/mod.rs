//! The site writer: places an exported notebook into a site tree.
//!
//! [`SiteWriter::convert`] runs the exporter, then materializes the result:
//! image resources first (embedded bytes, then copied files), markdown last.
//! Every write overwrites whatever is already on disk, so converting the same
//! notebook twice converges on the same files. Nothing is rolled back if a
//! later write fails.

mod report;

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::{DocumentName, Layout, ParseNameError, ResourceName, Resources, Section};
use crate::export::{CommandExporter, ExportError, Exporter, ExporterConfig};
use crate::infra::{FsError, copy_preserving, ensure_dir, ensure_parent, write_file};

pub use report::{Artifact, NoopReporter, WriteReporter, created_message, shorten_path};

/// Errors raised by [`SiteWriter`].
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("resources bundle has no metadata.name")]
    MissingName,

    #[error("{0}")]
    InvalidName(ParseNameError),

    #[error("{0}")]
    InvalidResourceName(ParseNameError),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// What a conversion wrote, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertSummary {
    pub name: DocumentName,
    pub layout: Layout,
    pub markdown_file: PathBuf,
    pub image_dir: PathBuf,
    pub images: Vec<PathBuf>,
}

/// Where the bytes of a resource entry come from.
#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Bytes(&'a [u8]),
    File(&'a Path),
}

impl Source<'_> {
    fn write_to(self, target: &Path) -> Result<(), FsError> {
        match self {
            Source::Bytes(bytes) => write_file(target, bytes),
            Source::File(path) => copy_preserving(path, target),
        }
    }
}

type Entries<'a> = Vec<(ResourceName, Source<'a>)>;

/// Converts notebooks into site content using a fixed [`Layout`].
pub struct SiteWriter<E = CommandExporter> {
    exporter: E,
    layout: Layout,
}

impl SiteWriter<CommandExporter> {
    /// Creates a writer backed by the command exporter.
    ///
    /// `config` defaults to [`ExporterConfig::default`] (`jupyter nbconvert`).
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidConfig` if the exporter configuration is
    /// unusable.
    pub fn new(use_page_bundle: bool, config: Option<ExporterConfig>) -> Result<Self, ExportError> {
        let exporter = CommandExporter::new(config.unwrap_or_default())?;
        Ok(Self::with_exporter(
            Layout::from_page_bundle(use_page_bundle),
            exporter,
        ))
    }
}

impl<E: Exporter> SiteWriter<E> {
    pub fn with_exporter(layout: Layout, exporter: E) -> Self {
        Self { exporter, layout }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Exports `notebook` and writes it into `section` of the site at
    /// `site_dir`.
    pub fn convert(
        &self,
        notebook: &Path,
        site_dir: &Path,
        section: &Section,
    ) -> Result<ConvertSummary, ConvertError> {
        self.convert_with_reporter(notebook, site_dir, section, &mut NoopReporter)
    }

    /// Like [`convert`](Self::convert), notifying `reporter` of each file
    /// created.
    pub fn convert_with_reporter<R: WriteReporter>(
        &self,
        notebook: &Path,
        site_dir: &Path,
        section: &Section,
        reporter: &mut R,
    ) -> Result<ConvertSummary, ConvertError> {
        let exported = self.exporter.export(notebook)?;
        // `exported` owns the scratch files `images_path` points at, so it
        // must outlive the writes.
        self.write(
            &exported.markdown,
            &exported.resources,
            site_dir,
            section,
            reporter,
        )
    }

    /// Writes already-exported markdown and resources into the site.
    ///
    /// Names are validated before anything touches the disk.
    pub fn write<R: WriteReporter>(
        &self,
        markdown: &str,
        resources: &Resources,
        site_dir: &Path,
        section: &Section,
        reporter: &mut R,
    ) -> Result<ConvertSummary, ConvertError> {
        let name = resources.name().ok_or(ConvertError::MissingName)?;
        let name = DocumentName::new(name).map_err(ConvertError::InvalidName)?;

        let outputs = entries(
            resources
                .outputs
                .iter()
                .flatten()
                .map(|(key, bytes)| (key.as_str(), Source::Bytes(bytes))),
        )?;
        let copies = entries(
            resources
                .images_path
                .iter()
                .flatten()
                .map(|(key, path)| (key.as_str(), Source::File(path))),
        )?;

        let paths = self.layout.paths(site_dir, section, &name);
        let mut images = Vec::with_capacity(resources.image_count());

        // A key present in both maps is written twice; the copy wins.
        materialize(&paths.image_dir, &outputs, reporter, &mut images)?;
        materialize(&paths.image_dir, &copies, reporter, &mut images)?;

        ensure_parent(&paths.markdown_file)?;
        write_file(&paths.markdown_file, markdown.as_bytes())?;
        reporter.on_created(&paths.markdown_file, Artifact::Markdown);

        Ok(ConvertSummary {
            name,
            layout: self.layout,
            markdown_file: paths.markdown_file,
            image_dir: paths.image_dir,
            images,
        })
    }
}

fn entries<'a>(
    raw: impl Iterator<Item = (&'a str, Source<'a>)>,
) -> Result<Entries<'a>, ConvertError> {
    raw.map(|(key, source)| {
        ResourceName::new(key)
            .map(|name| (name, source))
            .map_err(ConvertError::InvalidResourceName)
    })
    .collect()
}

/// Ensures `image_dir` exists, then writes every entry below it.
///
/// Does nothing, not even creating the directory, when `entries` is empty.
fn materialize<R: WriteReporter>(
    image_dir: &Path,
    entries: &[(ResourceName, Source<'_>)],
    reporter: &mut R,
    written: &mut Vec<PathBuf>,
) -> Result<(), FsError> {
    if entries.is_empty() {
        return Ok(());
    }
    ensure_dir(image_dir)?;

    for (key, source) in entries {
        let target = key.resolve(image_dir);
        ensure_parent(&target)?;
        source.write_to(&target)?;
        reporter.on_created(&target, Artifact::Image);
        written.push(target);
    }
    Ok(())
}
