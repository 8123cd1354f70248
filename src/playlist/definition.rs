use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::library;

/// A named playlist and the library path prefixes feeding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDefinition {
    pub name: String,
    pub filters: Vec<String>,
}

/// Playlist definitions in the order the JSON document lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistDefinitions {
    pub path: PathBuf,
    pub entries: Vec<PlaylistDefinition>,
}

impl PlaylistDefinitions {
    /// Load a JSON object of `name -> [filter, ...]`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::PlaylistConfigNotFound(path.to_path_buf()),
            _ => Error::io(path, e),
        })?;
        let path = library::absolute(path)?;
        let entries = parse(&text).map_err(|source| Error::PlaylistConfigInvalid {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), count = entries.len(), "playlist definitions loaded");
        Ok(Self { path, entries })
    }

    /// Keep only the playlist called `name`. An unknown name leaves nothing
    /// to generate; it is reported but not treated as an error.
    pub fn select(mut self, name: Option<&str>) -> Self {
        if let Some(name) = name {
            self.entries.retain(|d| d.name == name);
            if self.entries.is_empty() {
                warn!(playlist = name, path = %self.path.display(), "no playlist with that name");
            }
        }
        self
    }
}

fn parse(text: &str) -> serde_json::Result<Vec<PlaylistDefinition>> {
    let map: Map<String, Value> = serde_json::from_str(text)?;
    map.into_iter()
        .map(|(name, filters)| {
            Ok::<_, serde_json::Error>(PlaylistDefinition {
                name,
                filters: serde_json::from_value(filters)?,
            })
        })
        .collect()
}
