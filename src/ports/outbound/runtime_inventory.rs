use crate::analysis::domain::RuntimeMetadata;
use crate::shared::Result;

/// RuntimeInventory port for enumerating installed JDKs
///
/// The inventory is an external collaborator: the core only reads it, and
/// never mutates installed-runtime state. The list is treated as read-only
/// for the duration of a run.
pub trait RuntimeInventory {
    /// Enumerates the installed runtimes.
    ///
    /// # Returns
    /// Metadata for every detected runtime, in a stable order
    ///
    /// # Errors
    /// Returns an error if the inventory source (e.g. an installations
    /// manifest) exists but cannot be read or parsed
    fn installed_runtimes(&self) -> Result<Vec<RuntimeMetadata>>;

    /// The runtime the host process itself would use (e.g. `JAVA_HOME`).
    ///
    /// Used to suppress the toolchain diagnostic when the resolved toolchain
    /// is the default one anyway. `None` when no default is known.
    fn current_runtime(&self) -> Option<RuntimeMetadata>;
}
