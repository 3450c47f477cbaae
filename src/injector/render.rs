//! Entrypoint script rendering
//!
//! Turns a service's file mappings into one shell script: a fragment per file
//! that materializes the content at its destination path, followed by an
//! `exec` of the service command.

use std::path::Path;

use super::content::{check_content, resolve_contents};
use super::encoding::compress_and_encode;
use super::errors::InjectError;
use super::manifest::Service;

/// Renders the shell script a service runs as its entrypoint.
///
/// Fragments are emitted in ascending lexical order of the raw
/// `source:destination` reference string, independent of manifest order, so
/// an unchanged manifest renders byte-identical output on every run. The
/// script ends with `exec <service.exec>`, the process that becomes the
/// container's foreground process once all files are written.
///
/// # Errors
///
/// Propagates resolution, validation, and encoding errors; no partial script
/// is produced.
pub fn render_entrypoint(service: &Service) -> Result<String, InjectError> {
    let contents = resolve_contents(service)?;

    let mut fragments = Vec::with_capacity(contents.len());
    for (reference, bytes) in &contents {
        let destination = reference.destination();
        let fragment = if service.compressed {
            let payload = compress_and_encode(reference.source(), bytes)?;
            render_compressed(destination, &payload)
        } else {
            let text = String::from_utf8_lossy(bytes);
            check_content(reference.source(), &text)?;
            render_literal(destination, &text)
        };
        fragments.push(fragment);
    }

    let mut script = fragments.join("\n");
    if !script.is_empty() {
        script.push('\n');
    }
    script.push_str("exec ");
    script.push_str(&service.exec);
    Ok(script)
}

fn render_literal(destination: &str, content: &str) -> String {
    format!(
        "# inject {base}\nmkdir -p {dir}\ncat <<EOF > {destination}\n{content}\nEOF",
        base = base_name(destination),
        dir = parent_dir(destination),
    )
}

fn render_compressed(destination: &str, payload: &str) -> String {
    format!(
        "# inject {base}\nmkdir -p {dir}\necho {payload} | base64 -d | gunzip > {destination}",
        base = base_name(destination),
        dir = parent_dir(destination),
    )
}

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |name| name.to_string_lossy().into_owned())
}

fn parent_dir(path: &str) -> String {
    match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}
