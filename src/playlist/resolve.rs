use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::library::Library;
use crate::sidecar;

/// Extensions a sidecar prefix can resolve to. Matched case-sensitively.
pub const AUDIO_EXTENSIONS: [&str; 2] = ["m4a", "mp3"];

/// Outcome of resolving one album sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumTracks {
    pub sidecar: PathBuf,
    /// Sidecar prefixes, sorted.
    pub prefixes: Vec<String>,
    /// Resolved files, in sidecar (sorted prefix) order.
    pub tracks: Vec<PathBuf>,
    /// Prefixes that matched no file.
    pub unresolved: Vec<String>,
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Audio files sitting next to `sidecar`, sorted ascending.
fn sibling_audio_files(sidecar: &Path) -> Result<Vec<PathBuf>> {
    let dir = sidecar.parent().unwrap_or(Path::new("."));
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && is_audio_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// First file (in sorted order) whose stem starts with `prefix`. A prefix
/// equal to a whole stem matches too.
fn find_track<'a>(files: &'a [PathBuf], prefix: &str) -> Option<&'a PathBuf> {
    files.iter().find(|f| {
        f.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.starts_with(prefix))
    })
}

/// Resolve every prefix of `sidecar` against the audio files beside it.
pub fn resolve_album(sidecar: &Path) -> Result<AlbumTracks> {
    let prefixes = sidecar::read(sidecar)?;
    let files = sibling_audio_files(sidecar)?;

    let mut tracks = Vec::with_capacity(prefixes.len());
    let mut unresolved = Vec::new();
    for prefix in &prefixes {
        match find_track(&files, prefix) {
            Some(track) => tracks.push(track.clone()),
            None => unresolved.push(prefix.clone()),
        }
    }

    debug!(
        sidecar = %sidecar.display(),
        resolved = tracks.len(),
        unresolved = unresolved.len(),
        "album resolved"
    );
    Ok(AlbumTracks {
        sidecar: sidecar.to_path_buf(),
        prefixes,
        tracks,
        unresolved,
    })
}

/// Resolved files of one album; unmatched prefixes are dropped.
pub fn resolve_album_tracks(sidecar: &Path) -> Result<Vec<PathBuf>> {
    Ok(resolve_album(sidecar)?.tracks)
}

/// Playlist album order: album folder name descending, so the highest
/// numbered album comes first. Equal names fall back to the full path.
fn album_order(a: &Path, b: &Path) -> Ordering {
    let album = |p: &Path| p.parent().and_then(Path::file_name).map(|n| n.to_os_string());
    album(b).cmp(&album(a)).then_with(|| a.cmp(b))
}

fn playlist_sidecars(library: &Library, filters: &[String]) -> Result<Vec<PathBuf>> {
    let mut sidecars = library.collect_sidecars(filters)?;
    sidecars.sort_by(|a, b| album_order(a, b));
    Ok(sidecars)
}

/// Resolve every album selected by `filters`, newest album first.
pub fn resolve_playlist(library: &Library, filters: &[String]) -> Result<Vec<AlbumTracks>> {
    playlist_sidecars(library, filters)?
        .iter()
        .map(|s| resolve_album(s))
        .collect()
}

/// All tracks of the albums selected by `filters`, concatenated.
pub fn resolve_playlist_tracks(library: &Library, filters: &[String]) -> Result<Vec<PathBuf>> {
    let mut tracks = Vec::new();
    for sidecar in playlist_sidecars(library, filters)? {
        tracks.extend(resolve_album_tracks(&sidecar)?);
    }
    Ok(tracks)
}
