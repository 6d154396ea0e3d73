/// Shared kernel - error types and helpers used by every layer
pub mod error;
pub mod security;

/// Result alias used across the crate; errors are `anyhow::Error` wrapping
/// [`error::SbomError`] where the caller needs to tell failures apart.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
