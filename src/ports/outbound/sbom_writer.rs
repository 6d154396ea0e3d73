use crate::sbom_generation::domain::SbomDocument;
use crate::shared::Result;
use std::path::PathBuf;

/// SbomWriter port for persisting generated documents
///
/// This port abstracts the output destination so use cases never touch the
/// file system directly.
pub trait SbomWriter {
    /// Writes `document` under `file_name` and returns the full path written
    ///
    /// An existing file with the same name is replaced.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The output location cannot be created
    /// - The destination is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn write(&self, file_name: &str, document: &SbomDocument) -> Result<PathBuf>;
}
