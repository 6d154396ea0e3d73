use crate::shared::Result;
use reqwest::Url;

/// Maximum length of an owner or repository name segment (GitHub limit is 100)
const MAX_SEGMENT_LENGTH: usize = 100;

/// Hosts accepted when a repository is given as a full URL
const ACCEPTED_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Identifies one remote repository as `owner/name`.
///
/// Built from either `owner/name` or a full `https://github.com/owner/name`
/// URL. Anything after the second path segment of a URL is ignored, as is a
/// trailing `.git`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryReference {
    owner: String,
    name: String,
}

impl RepositoryReference {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();
        validate_segment(&owner, "owner")?;
        validate_segment(&name, "repository name")?;
        Ok(Self { owner, name })
    }

    /// Parses user input (CLI value or batch file record).
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            anyhow::bail!("Repository identifier cannot be empty");
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Self::from_url(input);
        }

        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) => Self::new(owner, strip_git_suffix(name)),
            _ => anyhow::bail!(
                "Invalid repository '{}': expected 'owner/name' or a GitHub URL",
                input
            ),
        }
    }

    fn from_url(input: &str) -> Result<Self> {
        let url = Url::parse(input)
            .map_err(|e| anyhow::anyhow!("Invalid repository URL '{}': {}", input, e))?;

        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        if !ACCEPTED_HOSTS.contains(&host.as_str()) {
            anyhow::bail!(
                "Invalid repository URL '{}': only github.com URLs are supported",
                input
            );
        }

        // Path segments come back percent-encoded
        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty());
        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) => {
                let owner = decode_segment(input, owner)?;
                let name = decode_segment(input, name)?;
                Self::new(owner, strip_git_suffix(&name))
            }
            _ => anyhow::bail!(
                "Invalid repository URL '{}': expected https://github.com/owner/name",
                input
            ),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn decode_segment(input: &str, segment: &str) -> Result<String> {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| anyhow::anyhow!("Invalid repository URL '{}': {}", input, e))
}

fn strip_git_suffix(name: &str) -> &str {
    name.strip_suffix(".git").unwrap_or(name)
}

fn validate_segment(segment: &str, what: &str) -> Result<()> {
    if segment.is_empty() {
        anyhow::bail!("Repository {} cannot be empty", what);
    }

    if segment.len() > MAX_SEGMENT_LENGTH {
        anyhow::bail!(
            "Repository {} is too long ({} bytes). Maximum allowed: {} bytes",
            what,
            segment.len(),
            MAX_SEGMENT_LENGTH
        );
    }

    if segment == "." || segment == ".." {
        anyhow::bail!("Repository {} cannot be '{}'", what, segment);
    }

    // GitHub names are plain ASCII; this also catches BOMs and escapes
    if segment
        .chars()
        .any(|c| !c.is_ascii_graphic() || matches!(c, '/' | '\\' | '?' | '#' | '%'))
    {
        anyhow::bail!(
            "Repository {} '{}' contains characters that are not allowed",
            what,
            segment
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_name() {
        let repo = RepositoryReference::parse("octocat/hello-world").unwrap();
        assert_eq!(repo.owner(), "octocat");
        assert_eq!(repo.name(), "hello-world");
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let repo = RepositoryReference::parse("  octocat/hello-world \n").unwrap();
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }

    #[test]
    fn test_parse_https_url() {
        let repo = RepositoryReference::parse("https://github.com/rust-lang/cargo").unwrap();
        assert_eq!(repo.owner(), "rust-lang");
        assert_eq!(repo.name(), "cargo");
    }

    #[test]
    fn test_parse_url_with_extra_path_and_git_suffix() {
        let repo =
            RepositoryReference::parse("https://github.com/rust-lang/cargo/tree/master").unwrap();
        assert_eq!(repo.to_string(), "rust-lang/cargo");

        let repo = RepositoryReference::parse("https://www.github.com/rust-lang/cargo.git/").unwrap();
        assert_eq!(repo.to_string(), "rust-lang/cargo");
    }

    #[test]
    fn test_parse_url_host_is_case_insensitive() {
        let repo = RepositoryReference::parse("https://GitHub.com/octo/repo").unwrap();
        assert_eq!(repo.to_string(), "octo/repo");
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        let err = RepositoryReference::parse("https://gitlab.com/octo/repo").unwrap_err();
        assert!(err.to_string().contains("only github.com"));
    }

    #[test]
    fn test_parse_rejects_url_without_repo() {
        assert!(RepositoryReference::parse("https://github.com/octo").is_err());
        assert!(RepositoryReference::parse("https://github.com/").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_identifiers() {
        for input in ["", "octo", "octo/", "/repo", "a/b/c", "octo/my repo", "../etc"] {
            assert!(
                RepositoryReference::parse(input).is_err(),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_url_decodes_percent_escapes() {
        let repo = RepositoryReference::parse("https://github.com/octo/my%2Drepo").unwrap();
        assert_eq!(repo.name(), "my-repo");

        // Decodes to a space, which is not allowed
        assert!(RepositoryReference::parse("https://github.com/octo/my%20repo").is_err());
        assert!(RepositoryReference::parse("https://github.com/octo/my%2520repo").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_and_escape_characters() {
        for input in ["\u{feff}octo/one", "octo/r\u{e9}po", "octo/my%20repo", "octo/na\u{a0}me"] {
            assert!(
                RepositoryReference::parse(input).is_err(),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_new_rejects_long_segment() {
        let long = "a".repeat(MAX_SEGMENT_LENGTH + 1);
        let err = RepositoryReference::new("octo", long).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }
}
