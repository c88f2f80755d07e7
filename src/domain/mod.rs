//! Core types: Layout, SitePaths, DocumentName, Section, Resources

mod layout;
mod name;
mod resources;

pub use layout::{BUNDLE_INDEX, CONTENT_DIR, Layout, STATIC_DIR, SitePaths};
pub use name::{DocumentName, ParseNameError, ResourceName, Section};
pub use resources::{Metadata, Resources};
