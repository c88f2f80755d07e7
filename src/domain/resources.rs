//! The resources bundle an exporter hands back next to the markdown.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Document metadata reported by the exporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Document slug. Exporters are expected to always set it; a bundle
    /// without one is rejected by the writer.
    pub name: Option<String>,
}

/// Non-markdown artifacts of an export, plus the metadata needed to place them.
///
/// Maps are ordered so writes (and the "Created" lines reporting them) happen
/// in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    pub metadata: Metadata,
    /// Images embedded in the document, keyed by output file name.
    pub outputs: Option<BTreeMap<String, Vec<u8>>>,
    /// Images already on disk that must be copied, keyed by output file name.
    pub images_path: Option<BTreeMap<String, PathBuf>>,
}

impl Resources {
    /// Creates an empty bundle for the named document.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                name: Some(name.into()),
            },
            ..Self::default()
        }
    }

    /// Adds an embedded image.
    pub fn with_output(mut self, file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.outputs
            .get_or_insert_with(BTreeMap::new)
            .insert(file_name.into(), bytes.into());
        self
    }

    /// Adds an image to copy from `source`.
    pub fn with_image_path(
        mut self,
        file_name: impl Into<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        self.images_path
            .get_or_insert_with(BTreeMap::new)
            .insert(file_name.into(), source.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Total number of image entries across both maps.
    pub fn image_count(&self) -> usize {
        self.outputs.as_ref().map_or(0, BTreeMap::len)
            + self.images_path.as_ref().map_or(0, BTreeMap::len)
    }
}
