pub mod generation_mode;
pub mod repository_reference;
pub mod sbom_document;

pub use generation_mode::{GenerationMode, RepositorySource};
pub use repository_reference::RepositoryReference;
pub use sbom_document::SbomDocument;
