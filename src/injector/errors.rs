//! Error types for the injection domain

use thiserror::Error;

/// Errors that can occur during an injection run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// Manifest or source file could not be read
    #[error("IO error reading {path}: {reason}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying IO error message.
        reason: String,
    },

    /// Manifest document is malformed
    #[error("Failed to parse manifest {path}: {reason}")]
    Parse {
        /// Path of the manifest document.
        path: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Literal content has a line ending in a space or tab
    #[error("error in {path}: file contains ending spaces or tabs (line {line})")]
    ContentValidation {
        /// Source path of the offending file.
        path: String,
        /// 1-based number of the first offending line.
        line: usize,
    },

    /// Compressing a payload failed
    #[error("Failed to encode content of {path}: {reason}")]
    Encoding {
        /// Source path of the file being encoded.
        path: String,
        /// Description of the compression failure.
        reason: String,
    },

    /// Target document could not be read, parsed, or rewritten
    #[error("Failed to patch service '{alias}' in job '{job}': {reason}")]
    Patch {
        /// Job name the patch targeted.
        job: String,
        /// Service alias the patch targeted.
        alias: String,
        /// Description of the patch failure.
        reason: String,
    },
}
