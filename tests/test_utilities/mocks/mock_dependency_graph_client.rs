use sbomgen::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DependencyGraphClient serving canned documents or HTTP statuses
///
/// Repositories without a canned response get a 404. Every call is recorded
/// so tests can assert on order and on "no request was made".
#[derive(Default, Clone)]
pub struct MockDependencyGraphClient {
    responses: HashMap<String, std::result::Result<String, u16>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockDependencyGraphClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sbom(mut self, repository: &str, body: &str) -> Self {
        self.responses
            .insert(repository.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_status(mut self, repository: &str, status: u16) -> Self {
        self.responses.insert(repository.to_string(), Err(status));
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyGraphClient for MockDependencyGraphClient {
    fn fetch_sbom(&self, repository: &RepositoryReference) -> sbomgen::shared::Result<SbomDocument> {
        let key = repository.to_string();
        self.calls.lock().unwrap().push(key.clone());

        match self.responses.get(&key) {
            Some(Ok(body)) => Ok(SbomDocument::new(body.clone())),
            Some(Err(status)) => Err(SbomError::RemoteApi {
                repository: key,
                status: Some(*status),
                details: "mock failure".to_string(),
            }
            .into()),
            None => Err(SbomError::RemoteApi {
                repository: key,
                status: Some(404),
                details: "Not Found".to_string(),
            }
            .into()),
        }
    }
}
