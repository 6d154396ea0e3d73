/// Domain layer - repository references, documents and the naming rules
/// that tie them to output files. No I/O happens here.
pub mod domain;
pub mod services;
