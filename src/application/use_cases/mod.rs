/// Use cases module containing application business logic orchestration
mod fetch_remote_sboms;
mod generate_local_sbom;

pub use fetch_remote_sboms::FetchRemoteSbomsUseCase;
pub use generate_local_sbom::GenerateLocalSbomUseCase;
