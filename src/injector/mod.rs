//! Injection domain types and logic

pub mod content;
pub mod encoding;
pub mod errors;
pub mod inject;
pub mod manifest;
pub mod options;
pub mod patch;
pub mod render;

// Re-export public types from submodules
pub use errors::InjectError;
pub use inject::inject;
pub use manifest::{FileReference, JobEntry, Manifest, Service};
pub use options::InjectOptions;
pub use patch::{EntrypointPatch, PatchEngine};
pub use render::render_entrypoint;
