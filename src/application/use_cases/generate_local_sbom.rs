use crate::ports::outbound::{ProgressReporter, SbomScanner, SbomWriter};
use crate::sbom_generation::services::OutputNaming;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// GenerateLocalSbomUseCase - scan a local directory and write the SBOM
///
/// # Type Parameters
/// * `S` - SbomScanner implementation
/// * `W` - SbomWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLocalSbomUseCase<S, W, PR> {
    scanner: S,
    writer: W,
    progress_reporter: PR,
}

impl<S, W, PR> GenerateLocalSbomUseCase<S, W, PR>
where
    S: SbomScanner,
    W: SbomWriter,
    PR: ProgressReporter,
{
    pub fn new(scanner: S, writer: W, progress_reporter: PR) -> Self {
        Self {
            scanner,
            writer,
            progress_reporter,
        }
    }

    /// Scans `target` and writes `local_sbom.spdx.json`
    ///
    /// # Returns
    /// Path of the written file
    ///
    /// # Errors
    /// Scanner and write failures abort the run; nothing is written when the
    /// scanner fails.
    pub fn execute(&self, target: &Path) -> Result<PathBuf> {
        self.progress_reporter.report(&format!(
            "🔍 Scanning {} with {}...",
            target.display(),
            self.scanner.tool_name()
        ));

        let document = self.scanner.scan(target)?;
        let path = self.writer.write(&OutputNaming::for_local(), &document)?;

        self.progress_reporter
            .report_completion(&format!("✅ SBOM generated at {}", path.display()));
        Ok(path)
    }
}
