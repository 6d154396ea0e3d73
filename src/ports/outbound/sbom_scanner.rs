use crate::sbom_generation::domain::SbomDocument;
use crate::shared::Result;
use std::path::Path;

/// SbomScanner port for producing an SBOM from a local directory
///
/// Implementations delegate to an external tool; the returned document is
/// whatever that tool printed.
pub trait SbomScanner {
    /// Name of the underlying tool, used in messages
    fn tool_name(&self) -> &str;

    /// Scans `target` and returns the SBOM document
    ///
    /// # Errors
    /// Returns [`SbomError::ExternalTool`](crate::shared::error::SbomError::ExternalTool) if:
    /// - The executable cannot be found or started
    /// - The tool exits with a non-zero status
    /// - The tool produces no output
    fn scan(&self, target: &Path) -> Result<SbomDocument>;
}
