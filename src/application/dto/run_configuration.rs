use crate::adapters::outbound::network::GitHubDependencyGraphClient;
use crate::adapters::outbound::process::SyftScanner;
use crate::sbom_generation::domain::GenerationMode;
use std::path::PathBuf;

/// Default directory SBOM files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "sboms";

/// RunConfiguration - the resolved inputs of one run
///
/// Built once by the dispatcher from flags, config file and environment;
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    pub mode: GenerationMode,
    pub output_dir: PathBuf,
    /// Scanner executable for local mode
    pub scanner: String,
    /// GitHub REST API base URL for online mode
    pub api_url: String,
}

impl RunConfiguration {
    /// Creates a configuration with the built-in defaults for everything but the mode
    pub fn new(mode: GenerationMode) -> Self {
        Self {
            mode,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            scanner: SyftScanner::DEFAULT_EXECUTABLE.to_string(),
            api_url: GitHubDependencyGraphClient::DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_scanner(mut self, scanner: String) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}
