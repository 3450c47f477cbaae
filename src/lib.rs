//! # Cinject - GitLab CI file injector
//!
//! Cinject embeds the contents of local files into the `entrypoint` of
//! service definitions inside a `.gitlab-ci.yml`, so small scripts and
//! configs travel inline with the pipeline instead of as separate artifacts.
//!
//! A YAML manifest declares which files belong to which job/service. For
//! every service, cinject renders one shell script that materializes each
//! file at its destination path (verbatim via heredoc, or gzip+base64
//! encoded) and ends by `exec`-ing the service command. The matching service
//! node in the pipeline document then gets its entrypoint rewritten to
//! `[interpreter, "-c", script]`, in place.
//!
//! ## Quick Start
//!
//! ```bash
//! # Inject serviceFile.yml into .gitlab-ci.yml
//! cinject inject
//!
//! # Explicit paths, failing on unmatched services
//! cinject inject -i serviceFile.yml -o .gitlab-ci.yml --strict
//! ```
//!
//! ## Features
//!
//! - **Deterministic output**: fragments are ordered lexically by their
//!   `source:destination` reference, so reruns on unchanged inputs produce
//!   byte-identical documents
//! - **Two encodings**: literal heredoc embedding, or gzip+base64 for
//!   binary and whitespace-sensitive content
//! - **Atomic patching**: each service patch is a temp-file-then-replace
//!   write cycle against the target document
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod infrastructure;
pub mod injector;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{YamlPatchEngine, init_logging};
pub use injector::{
    EntrypointPatch, FileReference, InjectError, InjectOptions, JobEntry, Manifest, PatchEngine,
    Service, inject, render_entrypoint,
};

/// Version of the cinject crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
