//! One handler per subcommand.
//!
//! Handlers return report values; `run` prints them. Nothing here keeps state
//! between invocations: each command scans, transforms and writes once.

mod table;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cli::Command;
use crate::config::{self, Settings};
use crate::error::{Error, Result};
use crate::library::{Album, Library, sidecar_labels};
use crate::playlist::{self, PlaylistDefinitions, m3u};
use crate::sidecar;

use table::Table;

/// What happened to one album's sidecar during `add` or `prune`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarChange {
    pub artist: String,
    pub album: String,
    pub status: &'static str,
}

impl SidecarChange {
    fn new(album: &Album, status: &'static str) -> Self {
        Self {
            artist: album.artist.clone(),
            album: album.title.clone(),
            status,
        }
    }
}

/// One `list` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub artist: String,
    pub album: String,
    pub prefixes: Vec<String>,
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatSummary {
    pub formatted: usize,
    pub unchanged: usize,
}

/// One playlist written by `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlaylist {
    pub name: String,
    pub path: PathBuf,
    pub tracks: usize,
}

impl fmt::Display for GeneratedPlaylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ {}: {} tracks written to \"{}\"",
            self.name,
            self.tracks,
            self.path.display()
        )
    }
}

fn sort_changes(changes: &mut [SidecarChange]) {
    changes.sort_by(|a, b| (&a.artist, &a.album).cmp(&(&b.artist, &b.album)));
}

/// Create an empty sidecar in every album that lacks one.
pub fn add(library: &Library) -> Result<Vec<SidecarChange>> {
    let mut changes = Vec::new();
    for album in library.albums() {
        let album = album?;
        let path = album.sidecar_path();
        if path.exists() {
            continue;
        }
        sidecar::create_empty(&path)?;
        changes.push(SidecarChange::new(&album, "written"));
    }
    sort_changes(&mut changes);
    info!(count = changes.len(), "sidecars added");
    Ok(changes)
}

/// Remove zero-byte sidecars; sidecars with any content are kept.
pub fn prune(library: &Library) -> Result<Vec<SidecarChange>> {
    let mut changes = Vec::new();
    for album in library.albums() {
        let album = album?;
        let path = album.sidecar_path();
        if !path.is_file() || !sidecar::is_empty(&path)? {
            continue;
        }
        std::fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        changes.push(SidecarChange::new(&album, "removed"));
    }
    sort_changes(&mut changes);
    info!(count = changes.len(), "sidecars pruned");
    Ok(changes)
}

/// Every non-empty sidecar with its prefixes, sorted by artist then album,
/// ignoring case first.
/// Unresolved prefixes are only looked up when `check_unresolved` is set.
pub fn list(library: &Library, check_unresolved: bool) -> Result<Vec<ListEntry>> {
    let mut entries = Vec::new();
    for path in library.sidecars(&[]) {
        let path = path?;
        if sidecar::is_empty(&path)? {
            continue;
        }
        let (artist, album) = sidecar_labels(&path);
        let (prefixes, unresolved) = if check_unresolved {
            let resolved = playlist::resolve_album(&path)?;
            (resolved.prefixes, resolved.unresolved)
        } else {
            (sidecar::read(&path)?, Vec::new())
        };
        entries.push(ListEntry {
            artist,
            album,
            prefixes,
            unresolved,
        });
    }
    entries.sort_by_cached_key(|e| {
        let key = format!("{} {}", e.artist, e.album);
        (key.to_lowercase(), key)
    });
    Ok(entries)
}

/// Rewrite every non-empty sidecar in canonical order.
pub fn format(library: &Library) -> Result<FormatSummary> {
    let mut summary = FormatSummary::default();
    for path in library.sidecars(&[]) {
        let path = path?;
        if sidecar::is_empty(&path)? {
            continue;
        }
        if sidecar::format(&path)? {
            summary.formatted += 1;
        } else {
            summary.unchanged += 1;
        }
    }
    info!(
        formatted = summary.formatted,
        unchanged = summary.unchanged,
        "sidecars formatted"
    );
    Ok(summary)
}

/// Write one `.m3u` per playlist definition into `output`.
///
/// With `warn_unresolved`, prefixes matching no file are logged per album;
/// they never fail the command.
pub fn generate(
    library: &Library,
    definitions: &PlaylistDefinitions,
    output: &Path,
    warn_unresolved: bool,
) -> Result<Vec<GeneratedPlaylist>> {
    let mut written = Vec::with_capacity(definitions.entries.len());
    for definition in &definitions.entries {
        let tracks: Vec<PathBuf> = if warn_unresolved {
            let albums = playlist::resolve_playlist(library, &definition.filters)?;
            for album in albums.iter().filter(|a| !a.unresolved.is_empty()) {
                warn!(
                    playlist = %definition.name,
                    sidecar = %album.sidecar.display(),
                    prefixes = ?album.unresolved,
                    "unresolved prefixes"
                );
            }
            albums.into_iter().flat_map(|a| a.tracks).collect()
        } else {
            playlist::resolve_playlist_tracks(library, &definition.filters)?
        };
        let path = m3u::write(output, &definition.name, &tracks)?;
        written.push(GeneratedPlaylist {
            name: definition.name.clone(),
            path,
            tracks: tracks.len(),
        });
    }
    Ok(written)
}

fn info_table(settings: &Settings) -> Table {
    let show = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };
    let config_path = config::resolve_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let mut table = Table::new(["key", "value"]);
    table.push(["config".to_string(), config_path]);
    table.push(["library".to_string(), show(&settings.library)]);
    table.push(["playlist".to_string(), show(&settings.playlist)]);
    table.push(["output".to_string(), show(&settings.output)]);
    table
}

fn print_table(table: &Table) {
    if table.is_empty() {
        println!("(no entries)");
    } else {
        print!("{table}");
    }
}

fn changes_table(changes: &[SidecarChange]) -> Table {
    let mut table = Table::new(["artist", "album", "status"]);
    for c in changes {
        table.push([c.artist.as_str(), c.album.as_str(), c.status]);
    }
    table
}

fn list_table(entries: &[ListEntry], with_unresolved: bool) -> Table {
    let mut headers = vec!["artist", "album", "tracks"];
    if with_unresolved {
        headers.push("unresolved");
    }
    let mut table = Table::new(headers);
    for e in entries {
        let mut row = vec![e.artist.clone(), e.album.clone(), e.prefixes.join(", ")];
        if with_unresolved {
            row.push(e.unresolved.join(", "));
        }
        table.push(row);
    }
    table
}

/// Execute `command` and print its report to stdout.
pub fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Init { force } => {
            let path = config::resolve_config_path().ok_or(Error::NoConfigLocation)?;
            config::write_template(&path, force)?;
            println!("✅ config successfully written to: {}", path.display());
        }
        Command::Info => {
            print!("{}", info_table(settings));
        }
        Command::Add { library } => {
            let library = Library::open(&settings.library_or(library.as_deref())?)?;
            print_table(&changes_table(&add(&library)?));
        }
        Command::Prune { library } => {
            let library = Library::open(&settings.library_or(library.as_deref())?)?;
            println!("library: {}", library.root().display());
            print_table(&changes_table(&prune(&library)?));
        }
        Command::List {
            library,
            unresolved,
        } => {
            let library = Library::open(&settings.library_or(library.as_deref())?)?;
            print_table(&list_table(&list(&library, unresolved)?, unresolved));
        }
        Command::Format { library } => {
            let library = Library::open(&settings.library_or(library.as_deref())?)?;
            let summary = format(&library)?;
            println!(
                "✅ {} formatted, {} already canonical",
                summary.formatted, summary.unchanged
            );
        }
        Command::Generate {
            library,
            config,
            output,
            playlist,
            unresolved,
        } => {
            let library = Library::open(&settings.library_or(library.as_deref())?)?;
            let config = settings.playlist_or(config.as_deref())?;
            let output = settings.output_or(output.as_deref())?;

            let definitions = PlaylistDefinitions::load(&config)?;
            println!("📖 Using playlist: '{}'", definitions.path.display());
            if let Some(name) = &playlist {
                println!("📖 Filter: {name}");
            }
            let definitions = definitions.select(playlist.as_deref());

            for generated in generate(&library, &definitions, &output, unresolved)? {
                println!("{generated}");
            }
        }
    }
    Ok(())
}
