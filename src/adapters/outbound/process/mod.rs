/// Process adapters - external tools run as subprocesses
mod syft_scanner;

pub use syft_scanner::SyftScanner;
