//! `cinject inject` - Render and inject service entrypoints
//!
//! Reads the manifest, renders one shell script per declared service, and
//! rewrites the matching entrypoints in the target pipeline document.
//!
//! ## Usage
//!
//! ```bash
//! cinject inject -i serviceFile.yml -o .gitlab-ci.yml
//! # Exit code 0: All services injected
//! # Exit code 1: Manifest, content, or patch failure
//! ```

use anyhow::Result;
use std::path::Path;

use cinject::{InjectOptions, Manifest, YamlPatchEngine, inject};

/// Runs one injection pass against the target document.
///
/// The manifest and every referenced source file are read fresh; each
/// service patch is applied one at a time, in manifest order. A failing
/// service aborts the run and leaves earlier patches in place.
pub fn run_inject(input: &Path, output: &Path, strict: bool) -> Result<()> {
    tracing::debug!(
        version = cinject::VERSION,
        manifest = %input.display(),
        document = %output.display(),
        "starting injection"
    );

    // Surface a missing target early, before any file content is read.
    if !output.exists() {
        anyhow::bail!("Target document not found: {}", output.display());
    }

    let manifest = Manifest::load(input)?;
    tracing::debug!(jobs = manifest.jobs.len(), "manifest loaded");

    let engine = YamlPatchEngine::new();
    let options = InjectOptions::new().strict(strict);

    inject(&manifest, output, &engine, options)?;

    Ok(())
}
