use crate::sbom_generation::domain::RepositoryReference;
use std::path::PathBuf;

/// A repository whose SBOM could not be produced
#[derive(Debug, Clone)]
pub struct FailedFetch {
    pub repository: RepositoryReference,
    pub message: String,
}

/// FetchReport - outcome of an online run
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Files written, in processing order
    pub written: Vec<PathBuf>,
    pub failures: Vec<FailedFetch>,
}

impl FetchReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn all_failed(&self) -> bool {
        self.written.is_empty() && !self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            format!("✅ Fetched {} SBOM(s)", self.written.len())
        } else {
            format!(
                "Fetched {} of {} SBOM(s), {} failed",
                self.written.len(),
                self.total(),
                self.failures.len()
            )
        }
    }
}
