//! Patch-engine seam
//!
//! The injector needs exactly one capability from the YAML layer: rewrite
//! the entrypoint of a service node, in place, atomically. The trait keeps
//! the document engine swappable and the orchestrator testable without
//! touching disk.

use std::path::Path;

use super::errors::InjectError;

/// One entrypoint rewrite against the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrypointPatch<'a> {
    /// Job key under which the service sequence lives.
    pub job: &'a str,
    /// Alias of the service node to rewrite.
    pub alias: &'a str,
    /// Interpreter placed first in the entrypoint array.
    pub interpreter: &'a str,
    /// Rendered script bound as the `-c` argument.
    pub script: &'a str,
}

/// Applies entrypoint patches to a pipeline document.
pub trait PatchEngine {
    /// Rewrites the entrypoint of every service node matching `patch` to
    /// `[interpreter, "-c", script]` and returns how many nodes were
    /// modified. Zero matches is success with zero modifications.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError::Patch`] if the document cannot be read,
    /// parsed, or rewritten.
    fn apply(&self, document: &Path, patch: &EntrypointPatch<'_>) -> Result<usize, InjectError>;
}
