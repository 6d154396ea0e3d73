use crate::sbom_generation::domain::RepositoryReference;

/// File name used for the SBOM produced in local mode
pub const LOCAL_SBOM_FILE_NAME: &str = "local_sbom.spdx.json";

/// Derives deterministic, path-safe output file names
pub struct OutputNaming;

impl OutputNaming {
    /// `{owner}_{name}_sbom.json` for a remote repository
    pub fn for_repository(repository: &RepositoryReference) -> String {
        Self::sanitize(&format!(
            "{}_{}_sbom.json",
            repository.owner(),
            repository.name()
        ))
    }

    pub fn for_local() -> String {
        LOCAL_SBOM_FILE_NAME.to_string()
    }

    /// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
    ///
    /// A leading dot is replaced as well so the result is never hidden and
    /// never resolves to `.` or `..`.
    pub fn sanitize(raw: &str) -> String {
        let mut sanitized: String = raw
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if sanitized.starts_with('.') {
            sanitized.replace_range(..1, "_");
        }
        if sanitized.is_empty() {
            sanitized.push('_');
        }
        sanitized
    }
}
