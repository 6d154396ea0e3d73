use crate::ports::outbound::SbomScanner;
use crate::sbom_generation::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::io;
use std::path::Path;
use std::process::Command;

/// SyftScanner adapter running `syft <target> -o spdx-json -q`
///
/// The SPDX JSON document is read from the child's stdout. The executable
/// defaults to `syft` on `PATH` and can be replaced (absolute path or a
/// compatible wrapper) through the `scanner` config key.
pub struct SyftScanner {
    executable: String,
}

impl SyftScanner {
    pub const DEFAULT_EXECUTABLE: &'static str = "syft";
    const OUTPUT_ARGS: [&'static str; 3] = ["-o", "spdx-json", "-q"];

    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn tool_error(&self, details: String, hint: &str) -> anyhow::Error {
        SbomError::ExternalTool {
            tool: self.executable.clone(),
            details,
            hint: hint.to_string(),
        }
        .into()
    }
}

impl Default for SyftScanner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXECUTABLE)
    }
}

impl SbomScanner for SyftScanner {
    fn tool_name(&self) -> &str {
        &self.executable
    }

    fn scan(&self, target: &Path) -> Result<SbomDocument> {
        let output = Command::new(&self.executable)
            .arg(target)
            .args(Self::OUTPUT_ARGS)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => self.tool_error(
                    format!("'{}' command not found", self.executable),
                    "Install syft (https://github.com/anchore/syft) and make sure it is on your PATH",
                ),
                _ => self.tool_error(
                    format!("Failed to start '{}': {}", self.executable, e),
                    "Check that the scanner executable is runnable",
                ),
            })?;

        if !output.status.success() {
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            let stderr = String::from_utf8_lossy(&output.stderr);
            let mut details = format!("exited with code {}", code);
            if !stderr.trim().is_empty() {
                details.push_str(&format!("\n{}", stderr.trim_end()));
            }
            return Err(self.tool_error(
                details,
                "Run the scanner manually against the target to see the full output",
            ));
        }

        let document = SbomDocument::new(String::from_utf8_lossy(&output.stdout).into_owned());
        if document.is_empty() {
            return Err(self.tool_error(
                "produced no output".to_string(),
                "Make sure the scanner supports '-o spdx-json' and writes to stdout",
            ));
        }

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_executable() {
        assert_eq!(SyftScanner::default().tool_name(), "syft");
    }

    #[test]
    fn test_missing_executable_is_external_tool_error() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = SyftScanner::new("sbomgen-test-no-such-scanner");

        let err = scanner.scan(temp_dir.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("command not found"));
        assert!(message.contains("Install syft"));
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::ExternalTool { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_captures_stdout() {
        // `echo` stands in for syft and prints the arguments it received
        let temp_dir = TempDir::new().unwrap();
        let scanner = SyftScanner::new("echo");

        let document = scanner.scan(temp_dir.path()).unwrap();
        assert!(document.as_str().contains("-o spdx-json -q"));
        assert!(document
            .as_str()
            .contains(temp_dir.path().to_str().unwrap()));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_carries_stderr() {
        // `sh <dir>` fails because a directory is not a script, and says so on stderr
        let temp_dir = TempDir::new().unwrap();
        let scanner = SyftScanner::new("sh");

        let err = scanner.scan(temp_dir.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("External tool 'sh' failed"));
        assert!(message.contains("exited with code"));
        assert!(message.lines().count() > 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_output_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = SyftScanner::new("true");

        let err = scanner.scan(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("produced no output"));
    }
}
