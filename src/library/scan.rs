use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::model::{Album, SIDECAR_NAME};
use crate::error::{Error, Result};

/// An opened library root.
///
/// The root is made absolute and free of `.`/`..` once, so every path handed
/// out by the scanner (and written to playlists) is too.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    /// Open a library, failing before any traversal when `root` is not a folder.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::LibraryNotFound(root.to_path_buf()));
        }
        let root = absolute(root)?;
        debug!(root = %root.display(), "library opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every album folder directly under an artist folder. Order follows the
    /// filesystem; callers sort when they need to.
    pub fn albums(&self) -> impl Iterator<Item = Result<Album>> + use<> {
        WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) if e.file_type().is_dir() => Album::from_dir(e.path()).map(Ok),
                Ok(_) => None,
                Err(e) => walk_error(e).map(Err),
            })
    }

    /// Every `pls` file anywhere under the root.
    ///
    /// With `filters`, only sidecars whose root-relative path starts with one
    /// of them (compared component by component) are yielded. A filter names
    /// an artist (`"Artist"`) or an album (`"Artist/0001 - Album"`) and is
    /// always taken literally.
    pub fn sidecars(&self, filters: &[String]) -> impl Iterator<Item = Result<PathBuf>> + use<> {
        let root = self.root.clone();
        let filters: Vec<PathBuf> = filters.iter().map(PathBuf::from).collect();

        WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(e) if is_sidecar(&e) && within_filters(&root, e.path(), &filters) => {
                    Some(Ok(e.into_path()))
                }
                Ok(_) => None,
                Err(e) => walk_error(e).map(Err),
            })
    }

    /// Collect the sidecars selected by `filters`.
    pub fn collect_sidecars(&self, filters: &[String]) -> Result<Vec<PathBuf>> {
        let out = self.sidecars(filters).collect::<Result<Vec<_>>>()?;
        debug!(count = out.len(), ?filters, "sidecars found");
        Ok(out)
    }
}

/// Make `path` absolute and drop `.`/`..` components lexically. Symlinks are
/// kept as written.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let full = std::path::absolute(path).map_err(|e| Error::io(path, e))?;
    let mut out = PathBuf::new();
    for component in full.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Symlinks pointing back at an ancestor are skipped; any other traversal
/// error aborts the scan.
fn walk_error(e: walkdir::Error) -> Option<Error> {
    if let Some(ancestor) = e.loop_ancestor() {
        warn!(
            path = ?e.path(),
            ancestor = %ancestor.display(),
            "skipping symlink loop"
        );
        return None;
    }
    Some(Error::Walk(e))
}

fn is_sidecar(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name() == SIDECAR_NAME
}

fn within_filters(root: &Path, path: &Path, filters: &[PathBuf]) -> bool {
    if filters.is_empty() {
        return true;
    }
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    filters.iter().any(|f| relative.starts_with(f))
}
