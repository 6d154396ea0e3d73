/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (scanner process, GitHub API, file system, console).
pub mod dependency_graph_client;
pub mod progress_reporter;
pub mod repository_list_reader;
pub mod sbom_scanner;
pub mod sbom_writer;

pub use dependency_graph_client::DependencyGraphClient;
pub use progress_reporter::ProgressReporter;
pub use repository_list_reader::RepositoryListReader;
pub use sbom_scanner::SbomScanner;
pub use sbom_writer::SbomWriter;
