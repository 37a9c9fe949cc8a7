use crate::analysis::domain::{ResolvedToolchain, RuntimeMetadata};
use crate::shared::error::CheckError;

/// ToolchainResolver - selects an installed runtime for a run
///
/// Pure service: the caller supplies the enumerated runtimes and a predicate;
/// resolution has no side effects. When several runtimes satisfy the
/// predicate the highest version wins; among equal versions the first
/// enumerated wins, so resolution is deterministic for a stable inventory.
pub struct ToolchainResolver;

impl ToolchainResolver {
    /// Resolve the toolchain for a run.
    ///
    /// # Errors
    /// Returns `CheckError::ToolchainNotFound` when no runtime satisfies the
    /// predicate. `requested` is only used to describe the constraint in that
    /// error - the predicate itself is authoritative.
    pub fn resolve<P>(
        predicate: P,
        requested: &str,
        runtimes: &[RuntimeMetadata],
    ) -> Result<ResolvedToolchain, CheckError>
    where
        P: Fn(&RuntimeMetadata) -> bool,
    {
        // A strictly-greater version is required to displace the current
        // best, so the first enumerated runtime wins among equal versions.
        runtimes
            .iter()
            .filter(|runtime| predicate(runtime))
            .fold(None::<&RuntimeMetadata>, |best, runtime| match best {
                Some(current) if runtime.version <= current.version => best,
                _ => Some(runtime),
            })
            .map(ResolvedToolchain::from_metadata)
            .ok_or_else(|| CheckError::ToolchainNotFound {
                requested: requested.to_string(),
            })
    }
}
