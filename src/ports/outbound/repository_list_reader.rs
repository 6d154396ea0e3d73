use crate::shared::Result;
use std::path::Path;

/// RepositoryListReader port for loading the content of a `--file` batch list
pub trait RepositoryListReader {
    /// Reads the whole list file as text
    fn read_repository_list(&self, path: &Path) -> Result<String>;
}
