/// Mock implementations for testing
mod mock_dependency_graph_client;
mod mock_progress_reporter;
mod mock_repository_list_reader;
mod mock_scanner;

pub use mock_dependency_graph_client::MockDependencyGraphClient;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_list_reader::MockRepositoryListReader;
pub use mock_scanner::MockScanner;
