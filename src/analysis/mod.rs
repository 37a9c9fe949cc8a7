/// Analysis core - domain models and pure services
///
/// This layer contains the violation/report/toolchain models and the
/// services that operate on them (toolchain resolution, report parsing).
/// It has no knowledge of processes, the filesystem, or the console.
pub mod domain;
pub mod services;
