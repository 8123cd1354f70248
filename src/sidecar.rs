//! Reading and writing `pls` sidecar files.
//!
//! A sidecar holds one track-name prefix per line. Prefixes are always handed
//! out sorted ascending, whatever order they have on disk, and `format`
//! rewrites the file in that canonical order.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Split sidecar text into its prefixes: carriage returns removed, empty
/// lines dropped, remaining lines sorted. Duplicates and surrounding
/// whitespace are kept as written.
pub fn parse(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .replace('\r', "")
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

/// Canonical on-disk form: prefixes joined by newlines, no trailing newline.
pub fn render(prefixes: &[String]) -> String {
    prefixes.join("\n")
}

pub fn read(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse(&text))
}

/// Create a zero-byte sidecar. Callers skip albums that already have one.
pub fn create_empty(path: &Path) -> Result<()> {
    fs::write(path, b"").map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "empty sidecar created");
    Ok(())
}

/// A zero-byte sidecar lists no tracks.
pub fn is_empty(path: &Path) -> Result<bool> {
    let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    Ok(meta.len() == 0)
}

/// Rewrite a sidecar in canonical order. Returns whether the file changed;
/// files already in canonical form are left untouched.
pub fn format(path: &Path) -> Result<bool> {
    let original = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let formatted = render(&parse(&original));
    if formatted == original {
        return Ok(false);
    }
    fs::write(path, &formatted).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "sidecar formatted");
    Ok(true)
}
