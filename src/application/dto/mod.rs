/// Data Transfer Objects for application layer
///
/// DTOs carry the resolved run settings into the use cases and the results
/// back out to the CLI.
mod fetch_report;
mod run_configuration;

pub use fetch_report::{FailedFetch, FetchReport};
pub use run_configuration::{RunConfiguration, DEFAULT_OUTPUT_DIR};
