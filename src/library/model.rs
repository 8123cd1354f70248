use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// File name of the per-album sidecar.
pub const SIDECAR_NAME: &str = "pls";

/// Album folders start with a four digit number followed by ` -`.
static ALBUM_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4} -").expect("album pattern is valid"));

pub fn is_album_dir_name(name: &str) -> bool {
    ALBUM_DIR.is_match(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub path: PathBuf,
    pub artist: String,
    pub title: String,
}

impl Album {
    /// Build an album from its folder path, or `None` when the folder name
    /// does not follow the `NNNN - Title` convention.
    pub fn from_dir(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if !is_album_dir_name(name) {
            return None;
        }
        Some(Self {
            path: path.to_path_buf(),
            artist: dir_name(path.parent()),
            title: album_title(name).to_string(),
        })
    }

    pub fn sidecar_path(&self) -> PathBuf {
        self.path.join(SIDECAR_NAME)
    }
}

/// Strip the `NNNN -` prefix and the space after it; other names pass through.
pub fn album_title(dir_name: &str) -> &str {
    if !is_album_dir_name(dir_name) {
        return dir_name;
    }
    let rest = &dir_name[6..];
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Artist and album title for a sidecar, taken from its two parent folders.
pub fn sidecar_labels(sidecar: &Path) -> (String, String) {
    let album_dir = sidecar.parent();
    let artist = dir_name(album_dir.and_then(Path::parent));
    let album = album_title(&dir_name(album_dir)).to_string();
    (artist, album)
}

fn dir_name(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
