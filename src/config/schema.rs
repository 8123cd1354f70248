use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default locations used by every command.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/pls/config.toml` or `~/.config/pls/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line arguments
/// 2) Environment variables (prefix `PLS__`, e.g. `PLS__LIBRARY`)
/// 3) Config file (if present)
/// 4) Struct defaults (all unset)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Library root holding `artist/NNNN - album` folders.
    pub library: Option<PathBuf>,
    /// JSON file mapping playlist names to path-prefix filters.
    pub playlist: Option<PathBuf>,
    /// Folder the `.m3u` files are written to.
    pub output: Option<PathBuf>,
}

/// Pick the command-line value when given, else the configured one.
/// Empty paths count as unset so a freshly `init`ed file behaves like no file.
fn pick(arg: Option<&Path>, configured: Option<&Path>) -> Option<PathBuf> {
    arg.filter(|p| !p.as_os_str().is_empty())
        .or(configured.filter(|p| !p.as_os_str().is_empty()))
        .map(Path::to_path_buf)
}

impl Settings {
    pub fn library_or(&self, arg: Option<&Path>) -> Result<PathBuf> {
        pick(arg, self.library.as_deref()).ok_or(Error::MissingLibrary)
    }

    pub fn playlist_or(&self, arg: Option<&Path>) -> Result<PathBuf> {
        pick(arg, self.playlist.as_deref()).ok_or(Error::MissingPlaylistConfig)
    }

    pub fn output_or(&self, arg: Option<&Path>) -> Result<PathBuf> {
        pick(arg, self.output.as_deref()).ok_or(Error::MissingOutputFolder)
    }

    /// Contents written by `pls init`: every key present, every value empty.
    pub fn template() -> Result<String> {
        let blank = Settings {
            library: Some(PathBuf::new()),
            playlist: Some(PathBuf::new()),
            output: Some(PathBuf::new()),
        };
        Ok(toml::to_string(&blank)?)
    }
}
