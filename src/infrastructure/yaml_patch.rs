//! YAML patch engine
//!
//! Rewrites service entrypoints in the target pipeline document. Each
//! application is a full read-modify-write cycle: the document is loaded into
//! a value tree, the matching service nodes are rewritten, and the tree is
//! serialized into a temporary file that atomically replaces the original.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_yaml::Value;

use crate::injector::{EntrypointPatch, InjectError, PatchEngine};

/// Patch engine backed by `serde_yaml`.
///
/// Key order of the document survives the round trip; comments do not, which
/// is as much formatting as the value model retains. The rendered script is
/// bound directly as a scalar node of the entrypoint sequence, so its content
/// never passes through an expression string or the shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlPatchEngine;

impl YamlPatchEngine {
    /// Creates a new patch engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PatchEngine for YamlPatchEngine {
    fn apply(&self, document: &Path, patch: &EntrypointPatch<'_>) -> Result<usize, InjectError> {
        let patch_err = |reason: String| InjectError::Patch {
            job: patch.job.to_string(),
            alias: patch.alias.to_string(),
            reason,
        };

        let raw = fs::read_to_string(document)
            .map_err(|e| patch_err(format!("cannot read {}: {e}", document.display())))?;
        let mut root: Value = serde_yaml::from_str(&raw)
            .map_err(|e| patch_err(format!("cannot parse {}: {e}", document.display())))?;

        let modified = rewrite_entrypoints(&mut root, patch);
        if modified == 0 {
            return Ok(0);
        }

        let rendered = serde_yaml::to_string(&root)
            .map_err(|e| patch_err(format!("cannot serialize {}: {e}", document.display())))?;
        write_in_place(document, &rendered)
            .map_err(|e| patch_err(format!("cannot write {}: {e}", document.display())))?;

        Ok(modified)
    }
}

/// Sets the entrypoint of every service node under `patch.job` whose alias
/// equals `patch.alias`, returning the number of nodes modified.
fn rewrite_entrypoints(root: &mut Value, patch: &EntrypointPatch<'_>) -> usize {
    let Some(services) = root
        .get_mut(patch.job)
        .and_then(|job| job.get_mut("services"))
        .and_then(Value::as_sequence_mut)
    else {
        return 0;
    };

    let mut modified = 0;
    for node in services.iter_mut() {
        if node.get("alias").and_then(Value::as_str) != Some(patch.alias) {
            continue;
        }
        if let Some(mapping) = node.as_mapping_mut() {
            mapping.insert(Value::from("entrypoint"), entrypoint_value(patch));
            modified += 1;
        }
    }
    modified
}

fn entrypoint_value(patch: &EntrypointPatch<'_>) -> Value {
    Value::Sequence(vec![
        Value::from(patch.interpreter),
        Value::from("-c"),
        Value::from(patch.script),
    ])
}

/// Temp-file-then-replace write cycle, so a patch application either fully
/// lands or leaves the original document untouched.
fn write_in_place(document: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match document.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(document).map_err(|e| e.error)?;
    Ok(())
}
