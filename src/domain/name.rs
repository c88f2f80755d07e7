//! Validated path components: document names, sections and resource keys.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Error returned when a name cannot be used as a path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError(String);

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNameError {}

/// Checks a single path segment.
fn check_segment(kind: &str, full: &str, segment: &str) -> Result<(), ParseNameError> {
    if segment.is_empty() {
        return Err(ParseNameError(format!(
            "invalid {kind} '{full}': empty path segment"
        )));
    }
    if segment == "." || segment == ".." {
        return Err(ParseNameError(format!(
            "invalid {kind} '{full}': '{segment}' is not allowed"
        )));
    }
    if segment.contains(['/', '\\', '\0']) {
        return Err(ParseNameError(format!(
            "invalid {kind} '{full}': must not contain path separators or NUL"
        )));
    }
    Ok(())
}

/// Checks a `/`-separated relative path, segment by segment.
fn check_relative(kind: &str, s: &str) -> Result<(), ParseNameError> {
    if s.is_empty() {
        return Err(ParseNameError(format!("{kind} cannot be empty")));
    }
    for segment in s.split('/') {
        check_segment(kind, s, segment)?;
    }
    Ok(())
}

fn join_segments(s: &str) -> PathBuf {
    s.split('/').collect()
}

/// The slug of a converted document.
///
/// Both the markdown file and the image directory are named after it, so it
/// must be usable as a single path component.
///
/// # Examples
///
/// ```
/// use nbhugo::domain::DocumentName;
///
/// let name = DocumentName::new("my-post").unwrap();
/// assert_eq!(name.as_str(), "my-post");
///
/// assert!(DocumentName::new("a/b").is_err());
/// assert!(DocumentName::new("..").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentName(String);

impl DocumentName {
    /// Creates a document name, rejecting empty values, `.`/`..`, and any
    /// value containing a path separator.
    pub fn new(s: &str) -> Result<Self, ParseNameError> {
        if s.is_empty() {
            return Err(ParseNameError("document name cannot be empty".to_string()));
        }
        check_segment("document name", s, s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A content section such as `posts`, or a nested one such as `blog/2024`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section(String);

impl Section {
    /// Creates a section from a `/`-separated relative path.
    ///
    /// A single trailing `/` is tolerated and dropped.
    pub fn new(s: &str) -> Result<Self, ParseNameError> {
        let s = s.strip_suffix('/').unwrap_or(s);
        check_relative("section", s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the section as a relative, platform-native path.
    pub fn to_path(&self) -> PathBuf {
        join_segments(&self.0)
    }
}

/// The key of a resource entry, relative to the image directory.
///
/// Usually a bare file name (`output_1_0.png`), but exporters may nest files
/// one or more directories deep (`my-post_files/output_1_0.png`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(s: &str) -> Result<Self, ParseNameError> {
        check_relative("resource name", s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves this key below `dir`.
    pub fn resolve(&self, dir: &Path) -> PathBuf {
        dir.join(join_segments(&self.0))
    }
}

macro_rules! string_like {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ParseNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

string_like!(DocumentName);
string_like!(Section);
string_like!(ResourceName);
