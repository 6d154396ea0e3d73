/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: console, file system,
/// GitHub API and the scanner subprocess.
pub mod outbound;
