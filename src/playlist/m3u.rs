//! M3U output: one absolute path per line, no header.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::library;

/// Join tracks with newlines; no `#EXTM3U` header and no trailing newline.
pub fn render(tracks: &[PathBuf]) -> String {
    tracks
        .iter()
        .map(|t| t.to_string_lossy())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `<output>/<name>.m3u`, creating `output` when needed. Returns the
/// absolute path of the written file.
pub fn write(output: &Path, name: &str, tracks: &[PathBuf]) -> Result<PathBuf> {
    let output = library::absolute(output)?;
    fs::create_dir_all(&output).map_err(|e| Error::io(&output, e))?;

    let path = output.join(format!("{name}.m3u"));
    fs::write(&path, render(tracks)).map_err(|e| Error::io(&path, e))?;
    debug!(path = %path.display(), tracks = tracks.len(), "playlist written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn render_joins_without_header_or_trailing_newline() {
        let tracks = vec![
            PathBuf::from("/music/A/0001 - One/01 - Intro.mp3"),
            PathBuf::from("/music/A/0001 - One/02 - Song.m4a"),
        ];
        assert_eq!(
            render(&tracks),
            "/music/A/0001 - One/01 - Intro.mp3\n/music/A/0001 - One/02 - Song.m4a"
        );
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn write_creates_missing_output_folders() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("deep").join("m3u");
        let tracks = vec![PathBuf::from("/a.mp3")];

        let path = write(&output, "mix", &tracks).unwrap();

        assert_eq!(path, output.join("mix.m3u"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "/a.mp3");
    }
}
