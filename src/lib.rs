//! sbomgen - generate SBOMs locally with syft or fetch them from GitHub
//!
//! Two modes are available:
//!
//! - **local**: runs `syft <target> -o spdx-json` and stores its output
//! - **online**: calls the GitHub dependency graph SBOM endpoint for one
//!   repository or a list of repositories
//!
//! Every document is written to its own file under an output directory
//! (`sboms/` by default).
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): repository references, documents and file naming
//! - **Application Layer** (`application`): use cases, DTOs and the mode dispatcher
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): scanner process, GitHub client, file system, console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbomgen::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let client = GitHubDependencyGraphClient::new(
//!     GitHubDependencyGraphClient::DEFAULT_API_URL,
//!     std::env::var("GITHUB_TOKEN")?,
//! )?;
//! let use_case = FetchRemoteSbomsUseCase::new(
//!     client,
//!     FileSystemReader::new(),
//!     OutputDirectoryWriter::new(PathBuf::from("sboms")),
//!     StderrProgressReporter::new(),
//! );
//!
//! let report = use_case.execute(&RepositorySource::Single("octocat/hello-world".to_string()))?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, OutputDirectoryWriter};
    pub use crate::adapters::outbound::network::GitHubDependencyGraphClient;
    pub use crate::adapters::outbound::process::SyftScanner;
    pub use crate::application::dispatcher::ModeDispatcher;
    pub use crate::application::dto::{FailedFetch, FetchReport, RunConfiguration};
    pub use crate::application::use_cases::{FetchRemoteSbomsUseCase, GenerateLocalSbomUseCase};
    pub use crate::ports::outbound::{
        DependencyGraphClient, ProgressReporter, RepositoryListReader, SbomScanner, SbomWriter,
    };
    pub use crate::sbom_generation::domain::{
        GenerationMode, RepositoryReference, RepositorySource, SbomDocument,
    };
    pub use crate::sbom_generation::services::{ListFormat, OutputNaming, RepositoryListParser};
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
