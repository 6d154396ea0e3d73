use crate::application::dto::{FailedFetch, FetchReport};
use crate::ports::outbound::{
    DependencyGraphClient, ProgressReporter, RepositoryListReader, SbomWriter,
};
use crate::sbom_generation::domain::{RepositoryReference, RepositorySource};
use crate::sbom_generation::services::{
    InvalidEntry, ListFormat, OutputNaming, RepositoryListParser,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Number of invalid entries listed in the error before the rest are elided
const MAX_LISTED_INVALID_ENTRIES: usize = 20;

/// FetchRemoteSbomsUseCase - fetch one or many repository SBOMs from the API
///
/// Repositories are processed one at a time in input order. A failure for
/// one repository is reported and the batch moves on; only a batch where
/// every repository failed is an error.
///
/// # Type Parameters
/// * `C` - DependencyGraphClient implementation
/// * `L` - RepositoryListReader implementation
/// * `W` - SbomWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchRemoteSbomsUseCase<C, L, W, PR> {
    client: C,
    list_reader: L,
    writer: W,
    progress_reporter: PR,
}

impl<C, L, W, PR> FetchRemoteSbomsUseCase<C, L, W, PR>
where
    C: DependencyGraphClient,
    L: RepositoryListReader,
    W: SbomWriter,
    PR: ProgressReporter,
{
    pub fn new(client: C, list_reader: L, writer: W, progress_reporter: PR) -> Self {
        Self {
            client,
            list_reader,
            writer,
            progress_reporter,
        }
    }

    pub fn execute(&self, source: &RepositorySource) -> Result<FetchReport> {
        // Step 1: Resolve every repository before the first request
        let repositories = self.resolve_repositories(source)?;

        // Step 2: Fetch and write each one
        let report = self.fetch_all(&repositories);

        // Step 3: Summarize
        if report.all_failed() {
            self.progress_reporter.report_error(&report.summary());
            return Err(SbomError::RemoteFetchFailed {
                failed: report.failures.len(),
                total: report.total(),
            }
            .into());
        }

        if report.failures.is_empty() {
            self.progress_reporter.report_completion(&report.summary());
        } else {
            self.progress_reporter
                .report_completion(&format!("⚠️  {}", report.summary()));
        }
        Ok(report)
    }

    fn resolve_repositories(&self, source: &RepositorySource) -> Result<Vec<RepositoryReference>> {
        match source {
            RepositorySource::Single(raw) => {
                let repository = RepositoryReference::parse(raw).map_err(|e| {
                    SbomError::configuration(
                        e.to_string(),
                        "Use 'owner/repo' or https://github.com/owner/repo",
                    )
                })?;
                Ok(vec![repository])
            }
            RepositorySource::BatchFile(path) => self.read_batch_file(path),
        }
    }

    fn read_batch_file(&self, path: &Path) -> Result<Vec<RepositoryReference>> {
        self.progress_reporter.report(&format!(
            "📖 Loading repository list from: {}",
            path.display()
        ));

        let content = self.list_reader.read_repository_list(path)?;
        let format = ListFormat::from_extension(path.extension().and_then(|ext| ext.to_str()));

        let repositories = RepositoryListParser::parse(&content, format)
            .map_err(|invalid| invalid_entries_error(path, &invalid))?;

        if repositories.is_empty() {
            return Err(SbomError::configuration(
                format!("No repositories found in {}", path.display()),
                "Add one 'owner/repo' per line",
            )
            .into());
        }

        self.progress_reporter
            .report(&format!("✅ Found {} repository(ies)", repositories.len()));
        Ok(repositories)
    }

    fn fetch_all(&self, repositories: &[RepositoryReference]) -> FetchReport {
        let total = repositories.len();
        let mut report = FetchReport::default();

        for (index, repository) in repositories.iter().enumerate() {
            let label = repository.to_string();
            self.progress_reporter
                .report_progress(index, total, Some(&label));

            match self.fetch_one(repository) {
                Ok(path) => {
                    self.progress_reporter
                        .report(&format!("✅ SBOM saved: {}", path.display()));
                    report.written.push(path);
                }
                Err(e) => {
                    let message = e.to_string();
                    if is_not_found(&e) {
                        self.progress_reporter.report_warning(&message);
                    } else {
                        self.progress_reporter.report_error(&message);
                    }
                    report.failures.push(FailedFetch {
                        repository: repository.clone(),
                        message,
                    });
                }
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(&label));
        }

        report
    }

    fn fetch_one(&self, repository: &RepositoryReference) -> Result<PathBuf> {
        let document = self.client.fetch_sbom(repository)?;
        self.writer
            .write(&OutputNaming::for_repository(repository), &document)
    }
}

fn is_not_found(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<SbomError>(),
        Some(SbomError::RemoteApi {
            status: Some(404),
            ..
        })
    )
}

fn invalid_entries_error(path: &Path, invalid: &[InvalidEntry]) -> anyhow::Error {
    let mut lines: Vec<String> = invalid
        .iter()
        .take(MAX_LISTED_INVALID_ENTRIES)
        .map(|entry| format!("  line {}: '{}' ({})", entry.line, entry.value, entry.reason))
        .collect();
    if invalid.len() > MAX_LISTED_INVALID_ENTRIES {
        lines.push(format!(
            "  ... and {} more",
            invalid.len() - MAX_LISTED_INVALID_ENTRIES
        ));
    }

    SbomError::configuration(
        format!(
            "Invalid repository entries in {}:\n{}",
            path.display(),
            lines.join("\n")
        ),
        "Each line must be 'owner/repo' or https://github.com/owner/repo",
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: usize) -> InvalidEntry {
        InvalidEntry {
            line,
            value: format!("bad-{}", line),
            reason: "expected 'owner/name'".to_string(),
        }
    }

    #[test]
    fn test_invalid_entries_error_lists_entries() {
        let err = invalid_entries_error(Path::new("repos.txt"), &[entry(2), entry(5)]);
        let message = err.to_string();
        assert!(message.contains("Invalid repository entries in repos.txt"));
        assert!(message.contains("line 2: 'bad-2'"));
        assert!(message.contains("line 5: 'bad-5'"));
        assert!(!message.contains("more"));
    }

    #[test]
    fn test_invalid_entries_error_elides_long_lists() {
        let invalid: Vec<InvalidEntry> = (1..=25).map(entry).collect();
        let message = invalid_entries_error(Path::new("repos.txt"), &invalid).to_string();
        assert!(message.contains("line 20: 'bad-20'"));
        assert!(!message.contains("line 21:"));
        assert!(message.contains("... and 5 more"));
    }

    #[test]
    fn test_is_not_found() {
        let not_found: anyhow::Error = SbomError::RemoteApi {
            repository: "a/b".to_string(),
            status: Some(404),
            details: String::new(),
        }
        .into();
        let forbidden: anyhow::Error = SbomError::RemoteApi {
            repository: "a/b".to_string(),
            status: Some(403),
            details: String::new(),
        }
        .into();
        assert!(is_not_found(&not_found));
        assert!(!is_not_found(&forbidden));
        assert!(!is_not_found(&anyhow::anyhow!("disk full")));
    }
}
