//! Injection orchestration
//!
//! Walks the manifest job by job, service by service, rendering each
//! entrypoint and driving the patch engine one service at a time.

use std::path::Path;

use super::errors::InjectError;
use super::manifest::Manifest;
use super::options::InjectOptions;
use super::patch::{EntrypointPatch, PatchEngine};
use super::render::render_entrypoint;

/// Injects every service of the manifest into the target document.
///
/// Services are processed strictly in manifest order, one render-and-patch
/// cycle each, never batched. The run is fail-fast and non-transactional:
/// the first failing service aborts the run and patches applied before it
/// stay in the document.
///
/// A service whose job/alias matches nothing in the target document is a
/// no-op by default and an error under [`InjectOptions::strict`].
///
/// # Errors
///
/// Returns the first rendering or patching error encountered.
pub fn inject(
    manifest: &Manifest,
    document: &Path,
    engine: &dyn PatchEngine,
    options: InjectOptions,
) -> Result<(), InjectError> {
    for entry in &manifest.jobs {
        for service in &entry.services {
            let script = render_entrypoint(service)?;
            let patch = EntrypointPatch {
                job: &entry.job,
                alias: &service.alias,
                interpreter: &service.interpreter,
                script: &script,
            };

            let modified = engine.apply(document, &patch)?;
            if modified == 0 {
                if options.strict {
                    return Err(InjectError::Patch {
                        job: entry.job.clone(),
                        alias: service.alias.clone(),
                        reason: "no matching service node in target document".to_string(),
                    });
                }
                tracing::debug!(
                    job = %entry.job,
                    alias = %service.alias,
                    "no matching service node, skipping"
                );
            } else {
                tracing::debug!(
                    job = %entry.job,
                    alias = %service.alias,
                    modified,
                    "entrypoint injected"
                );
            }
        }
    }
    Ok(())
}
