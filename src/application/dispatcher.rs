use crate::adapters::outbound::console::StderrProgressReporter;
use crate::adapters::outbound::filesystem::{FileSystemReader, OutputDirectoryWriter};
use crate::adapters::outbound::network::GitHubDependencyGraphClient;
use crate::adapters::outbound::process::SyftScanner;
use crate::application::dto::RunConfiguration;
use crate::application::use_cases::{FetchRemoteSbomsUseCase, GenerateLocalSbomUseCase};
use crate::cli::Args;
use crate::config::{discover_config, load_config_from_path, ConfigFile};
use crate::sbom_generation::domain::{GenerationMode, RepositorySource};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ModeDispatcher - turns the command line into a run and executes it
///
/// Every configuration problem is detected in [`ModeDispatcher::resolve`],
/// before a process is spawned or a request is sent.
pub struct ModeDispatcher;

impl ModeDispatcher {
    /// Loads the config file named by `--config`, or auto-discovers one in `dir`
    pub fn load_config_file(args: &Args, dir: &Path) -> Result<ConfigFile> {
        match args.config {
            Some(ref path) => load_config_from_path(path),
            None => Ok(discover_config(dir)?.unwrap_or_default()),
        }
    }

    /// Resolves flags and config file into a [`RunConfiguration`]
    ///
    /// Precedence is CLI flag, then config file, then built-in default.
    pub fn resolve(args: &Args, config_file: ConfigFile) -> Result<RunConfiguration> {
        let mode = Self::select_mode(args)?;

        let mut config = RunConfiguration::new(mode);
        if let Some(output_dir) = args
            .output
            .clone()
            .or_else(|| config_file.output_dir.map(PathBuf::from))
        {
            config = config.with_output_dir(output_dir);
        }
        if let Some(scanner) = config_file.scanner {
            config = config.with_scanner(scanner);
        }
        if let Some(api_url) = config_file.api_url {
            config = config.with_api_url(api_url);
        }

        Ok(config)
    }

    /// Selects exactly one of local or online mode
    pub fn select_mode(args: &Args) -> Result<GenerationMode> {
        match (args.local, args.online) {
            (true, true) => Err(SbomError::configuration(
                "--local and --online cannot be used together",
                "Choose exactly one mode: --local to scan a directory, --online to query GitHub",
            )
            .into()),
            (false, false) => Err(SbomError::configuration(
                "No mode selected",
                "Pass --local to scan a directory with syft, or --online to fetch from GitHub",
            )
            .into()),
            (true, false) => Self::local_mode(args),
            (false, true) => Self::remote_mode(args),
        }
    }

    fn local_mode(args: &Args) -> Result<GenerationMode> {
        if args.repo.is_some() || args.file.is_some() {
            return Err(SbomError::configuration(
                "--repo and --file are only used with --online",
                "Drop --repo/--file, or switch to --online",
            )
            .into());
        }

        let target = args.target.clone().unwrap_or_else(|| PathBuf::from("."));
        if !target.exists() {
            return Err(SbomError::configuration(
                format!("Target path does not exist: {}", target.display()),
                "Pass an existing directory with --target",
            )
            .into());
        }

        Ok(GenerationMode::Local { target })
    }

    fn remote_mode(args: &Args) -> Result<GenerationMode> {
        if args.target.is_some() {
            return Err(SbomError::configuration(
                "--target is only used with --local",
                "Drop --target, or switch to --local",
            )
            .into());
        }

        let source = match (&args.repo, &args.file) {
            (Some(repo), None) => RepositorySource::Single(repo.clone()),
            (None, Some(file)) => RepositorySource::BatchFile(file.clone()),
            (Some(_), Some(_)) => {
                return Err(SbomError::configuration(
                    "--repo and --file cannot be used together",
                    "Put the single repository in the file, or drop --file",
                )
                .into())
            }
            (None, None) => {
                return Err(SbomError::configuration(
                    "Online mode needs --repo or --file",
                    "Pass --repo owner/repo or --file repos.txt",
                )
                .into())
            }
        };

        let token = args
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                SbomError::configuration(
                    "A GitHub token is required for online mode",
                    "Pass --token or set the GITHUB_TOKEN environment variable",
                )
            })?;

        Ok(GenerationMode::Remote {
            token: token.to_string(),
            source,
        })
    }

    /// Wires the production adapters for the selected mode and runs it
    pub fn dispatch(config: &RunConfiguration) -> Result<()> {
        let writer = OutputDirectoryWriter::new(config.output_dir.clone());
        let progress_reporter = StderrProgressReporter::new();

        match &config.mode {
            GenerationMode::Local { target } => {
                let scanner = SyftScanner::new(config.scanner.clone());
                let use_case = GenerateLocalSbomUseCase::new(scanner, writer, progress_reporter);
                use_case.execute(target)?;
            }
            GenerationMode::Remote { token, source } => {
                let client = GitHubDependencyGraphClient::new(&config.api_url, token.clone())?;
                let use_case = FetchRemoteSbomsUseCase::new(
                    client,
                    FileSystemReader::new(),
                    writer,
                    progress_reporter,
                );
                use_case.execute(source)?;
            }
        }
        Ok(())
    }
}
