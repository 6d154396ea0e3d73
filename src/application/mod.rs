/// Application layer - Use cases, DTOs and the mode dispatcher
///
/// This layer orchestrates the domain services and talks to infrastructure
/// only through ports.
pub mod dispatcher;
pub mod dto;
pub mod use_cases;
