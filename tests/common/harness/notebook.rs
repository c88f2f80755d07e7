//! Builder for fake notebooks understood by the harness exporter.

/// A fake notebook.
///
/// The harness exporter copies the notebook file verbatim as the exported
/// markdown, and copies every file in the sibling `<stem>_assets/` directory
/// into `<stem>_files/`, mimicking nbconvert's output layout. A body starting
/// with `FAIL` makes the exporter exit with an error.
#[derive(Debug, Clone)]
pub struct TestNotebook {
    stem: String,
    body: String,
    images: Vec<(String, Vec<u8>)>,
}

impl TestNotebook {
    /// Creates a notebook whose document name will be `stem`.
    pub fn new(stem: impl Into<String>) -> Self {
        let stem = stem.into();
        Self {
            body: format!("# {stem}\n"),
            stem,
            images: Vec::new(),
        }
    }

    /// Sets the markdown the exporter will produce.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds an image the exporter will emit.
    pub fn image(mut self, file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.images.push((file_name.into(), bytes.into()));
        self
    }

    /// Makes the exporter reject this notebook.
    pub fn broken(self) -> Self {
        self.body("FAIL: not a notebook\n")
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn file_name(&self) -> String {
        format!("{}.ipynb", self.stem)
    }

    pub fn get_body(&self) -> &str {
        &self.body
    }

    pub fn images(&self) -> &[(String, Vec<u8>)] {
        &self.images
    }
}
