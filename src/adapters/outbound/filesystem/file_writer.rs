use crate::ports::outbound::SbomWriter;
use crate::sbom_generation::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// OutputDirectoryWriter adapter for writing SBOM documents into one directory
///
/// This adapter implements the SbomWriter port. The directory is created on
/// first use; files are overwritten without warning.
pub struct OutputDirectoryWriter {
    output_dir: PathBuf,
}

impl OutputDirectoryWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Creates the output directory (and parents) if it is missing
    pub fn ensure_output_dir(&self) -> Result<()> {
        reject_symlink(&self.output_dir, "write")?;

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(SbomError::FileWriteError {
                path: self.output_dir.clone(),
                details: "Output path exists and is not a directory".to_string(),
            }
            .into());
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| SbomError::FileWriteError {
            path: self.output_dir.clone(),
            details: format!("Failed to create output directory: {}", e),
        })?;
        Ok(())
    }

    /// Rejects names that would escape the output directory
    fn validate_file_name(&self, file_name: &str) -> Result<()> {
        let escapes = file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains('/')
            || file_name.contains('\\');
        if escapes {
            return Err(SbomError::SecurityError {
                path: self.output_dir.join(file_name),
                reason: format!("'{}' is not a plain file name", file_name),
                hint: "Output file names must not contain path separators".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl SbomWriter for OutputDirectoryWriter {
    fn write(&self, file_name: &str, document: &SbomDocument) -> Result<PathBuf> {
        self.validate_file_name(file_name)?;
        self.ensure_output_dir()?;

        let output_path = self.output_dir.join(file_name);
        reject_symlink(&output_path, "write")?;

        fs::write(&output_path, document.as_str()).map_err(|e| SbomError::FileWriteError {
            path: output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(output_path)
    }
}
