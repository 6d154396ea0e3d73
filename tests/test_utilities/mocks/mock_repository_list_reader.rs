use sbomgen::prelude::*;
use std::path::Path;

/// Mock RepositoryListReader returning fixed content for any path
pub struct MockRepositoryListReader {
    content: Option<String>,
}

impl MockRepositoryListReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// A reader that must never be asked for a file
    pub fn unused() -> Self {
        Self { content: None }
    }
}

impl RepositoryListReader for MockRepositoryListReader {
    fn read_repository_list(&self, path: &Path) -> sbomgen::shared::Result<String> {
        match self.content {
            Some(ref content) => Ok(content.clone()),
            None => panic!("unexpected read of {}", path.display()),
        }
    }
}
