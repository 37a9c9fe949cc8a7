pub mod toolchain_resolver;
pub mod violation_parser;

pub use toolchain_resolver::ToolchainResolver;
pub use violation_parser::ViolationParser;
