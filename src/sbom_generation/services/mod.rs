pub mod output_naming;
pub mod repository_list_parser;

pub use output_naming::{OutputNaming, LOCAL_SBOM_FILE_NAME};
pub use repository_list_parser::{InvalidEntry, ListFormat, RepositoryListParser};
