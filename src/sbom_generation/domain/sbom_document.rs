/// Opaque SBOM payload returned by the scanner or the dependency graph API.
///
/// The content is never parsed; it is written to disk exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomDocument {
    content: String,
}

impl SbomDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl From<String> for SbomDocument {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
