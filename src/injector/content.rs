//! Source file resolution and literal-content checking

use std::collections::BTreeMap;
use std::fs;

use super::errors::InjectError;
use super::manifest::{FileReference, Service};

/// Reads the byte content of every file reference of a service.
///
/// The result is keyed by the reference itself; iterating the map yields
/// references in ascending lexical order of the raw `source:destination`
/// string, which fixes fragment ordering downstream.
///
/// # Errors
///
/// Returns [`InjectError::Io`] naming the first unreadable source path.
/// Resolution is atomic: on error no partial result is returned.
pub fn resolve_contents(service: &Service) -> Result<BTreeMap<FileReference, Vec<u8>>, InjectError> {
    let mut contents = BTreeMap::new();
    for file in &service.files {
        let bytes = fs::read(file.source()).map_err(|e| InjectError::Io {
            path: file.source().to_string(),
            reason: e.to_string(),
        })?;
        contents.insert(file.clone(), bytes);
    }
    Ok(contents)
}

/// Rejects literal content whose lines end in a space or tab.
///
/// The heredoc embedding copies content verbatim, so trailing whitespace an
/// editor strips invisibly would change the materialized file without any
/// visible diff. Lines are split on line feeds; a trailing carriage return is
/// normalized away before the check. Compressed services never go through
/// this check since their bytes are encoded losslessly.
///
/// # Errors
///
/// Returns [`InjectError::ContentValidation`] carrying the 1-based number of
/// the first offending line.
pub fn check_content(path: &str, content: &str) -> Result<(), InjectError> {
    for (index, line) in content.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.ends_with(' ') || line.ends_with('\t') {
            return Err(InjectError::ContentValidation {
                path: path.to_string(),
                line: index + 1,
            });
        }
    }
    Ok(())
}
