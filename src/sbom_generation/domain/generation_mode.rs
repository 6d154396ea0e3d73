use std::path::PathBuf;

/// Where the repositories for a remote run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySource {
    /// A single identifier given with `--repo`
    Single(String),
    /// A file with one identifier per line given with `--file`
    BatchFile(PathBuf),
}

/// The two ways of producing an SBOM; exactly one is selected per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationMode {
    /// Run the local scanner against a directory
    Local { target: PathBuf },
    /// Fetch from the GitHub dependency graph API
    Remote {
        token: String,
        source: RepositorySource,
    },
}
