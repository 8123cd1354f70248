//! Error types shared by every command.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no library given: pass <library> as an argument or set `library` in the config")]
    MissingLibrary,

    #[error("library not found or not a directory: {}", .0.display())]
    LibraryNotFound(PathBuf),

    #[error("no playlist config given: pass -c <playlist> or set `playlist` in the config")]
    MissingPlaylistConfig,

    #[error("playlist config not found: {}", .0.display())]
    PlaylistConfigNotFound(PathBuf),

    #[error("invalid playlist config {}: {source}", path.display())]
    PlaylistConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no output folder given: pass -o <folder> or set `output` in the config")]
    MissingOutputFolder,

    #[error("config file already exists: {} (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    #[error("could not determine a config location (HOME is not set)")]
    NoConfigLocation,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
