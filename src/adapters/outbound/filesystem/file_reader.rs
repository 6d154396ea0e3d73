use crate::ports::outbound::RepositoryListReader;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_REPOSITORY_LIST_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading repository list files
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryListReader for FileSystemReader {
    fn read_repository_list(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(SbomError::configuration(
                format!("Repository list file not found: {}", path.display()),
                "Check the path passed to --file",
            )
            .into());
        }

        validate_regular_file(path, "Repository list")?;

        let metadata = fs::metadata(path).map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_REPOSITORY_LIST_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
