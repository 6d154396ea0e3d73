use sbomgen::prelude::*;
use std::path::Path;

/// Mock SbomScanner that either returns a document or behaves like a missing binary
pub struct MockScanner {
    output: Option<String>,
}

impl MockScanner {
    pub fn with_output(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { output: None }
    }
}

impl SbomScanner for MockScanner {
    fn tool_name(&self) -> &str {
        "mock-syft"
    }

    fn scan(&self, _target: &Path) -> sbomgen::shared::Result<SbomDocument> {
        match self.output {
            Some(ref output) => Ok(SbomDocument::new(output.clone())),
            None => Err(SbomError::ExternalTool {
                tool: "mock-syft".to_string(),
                details: "'mock-syft' command not found".to_string(),
                hint: "Install syft".to_string(),
            }
            .into()),
        }
    }
}
