use clap::Parser;
use std::path::PathBuf;

/// Generate SBOMs locally with syft or fetch them from the GitHub dependency graph API
#[derive(Parser, Debug, Default)]
#[command(name = "sbomgen")]
#[command(version)]
#[command(
    about = "Generate SBOMs locally via syft or fetch them from the GitHub Dependency Graph API",
    long_about = None
)]
pub struct Args {
    /// Generate an SBOM locally using syft
    #[arg(long)]
    pub local: bool,

    /// Fetch SBOMs from the GitHub dependency graph API
    #[arg(long)]
    pub online: bool,

    /// Single GitHub repository as 'owner/repo' or a full GitHub URL (online mode)
    #[arg(long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// File listing repositories, one per line; first column for .csv (online mode)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory to scan (local mode, defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Output directory for SBOM files [default: sboms]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// GitHub token used as a bearer token (online mode)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to a config file (defaults to ./sbomgen.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
