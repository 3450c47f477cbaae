//! Prelude module for common imports

// Re-export all injector types with full paths
pub use crate::injector::errors::InjectError;
pub use crate::injector::inject::inject;
pub use crate::injector::manifest::{FileReference, JobEntry, Manifest, Service};
pub use crate::injector::options::InjectOptions;
pub use crate::injector::patch::{EntrypointPatch, PatchEngine};
pub use crate::injector::render::render_entrypoint;

// Re-export infrastructure types
pub use crate::infrastructure::{YamlPatchEngine, init_logging};
