//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod clean;
pub mod feedback;
pub mod info;
pub mod schema;
pub mod session;
pub mod tone;

/// Read input text from a file, or from stdin when `path` is `None` or `-`.
///
/// One trailing line ending is dropped so a file holding a single line reads
/// the same as that line typed at a prompt.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = match path {
        Some(p) if p.as_str() != "-" => read_input_file(p, max_bytes)?,
        _ => read_stdin(max_bytes)?,
    };
    strip_line_ending(&mut content);
    Ok(content)
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .lock()
        .take(stdin_read_limit(max_bytes))
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    if let Some(max) = max_bytes
        && buf.len() > max
    {
        anyhow::bail!("input too large: stdin exceeds {max} bytes");
    }
    Ok(buf)
}

/// Bytes to pull from stdin: one past the limit, so overflow is detectable.
fn stdin_read_limit(max_bytes: Option<usize>) -> u64 {
    max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1))
}

pub(crate) fn strip_line_ending(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}
