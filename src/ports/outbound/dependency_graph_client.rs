use crate::sbom_generation::domain::{RepositoryReference, SbomDocument};
use crate::shared::Result;

/// DependencyGraphClient port for fetching repository SBOMs from a hosting platform
pub trait DependencyGraphClient {
    /// Fetches the SBOM of one repository
    ///
    /// # Arguments
    /// * `repository` - The repository to fetch
    ///
    /// # Returns
    /// The response body, unmodified
    ///
    /// # Errors
    /// Returns [`SbomError::RemoteApi`](crate::shared::error::SbomError::RemoteApi)
    /// for a non-success status or a transport failure
    fn fetch_sbom(&self, repository: &RepositoryReference) -> Result<SbomDocument>;
}
