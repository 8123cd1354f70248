use super::*;
use crate::error::Error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn mkdir(root: &Path, rel: &str) -> std::path::PathBuf {
    let p = root.join(rel);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn album_dir_names_need_four_digits_and_a_dash() {
    assert!(is_album_dir_name("0001 - Debut"));
    assert!(is_album_dir_name("1999 -"));
    assert!(is_album_dir_name("2020 -Live"));
    assert!(!is_album_dir_name("001 - Short"));
    assert!(!is_album_dir_name("0001 Debut"));
    assert!(!is_album_dir_name("Debut"));
    assert!(!is_album_dir_name("٠١٢٣ - Arabic digits"));
}

#[test]
fn album_title_strips_number_and_separator() {
    assert_eq!(album_title("0001 - Debut"), "Debut");
    assert_eq!(album_title("2020 -Live"), "Live");
    assert_eq!(album_title("1999 -"), "");
    assert_eq!(album_title("Loose Tracks"), "Loose Tracks");
}

#[test]
fn album_from_dir_reads_artist_and_title() {
    let album = Album::from_dir(Path::new("/music/Artist/0042 - Answer")).unwrap();
    assert_eq!(album.artist, "Artist");
    assert_eq!(album.title, "Answer");
    assert_eq!(
        album.sidecar_path(),
        Path::new("/music/Artist/0042 - Answer/pls")
    );
    assert!(Album::from_dir(Path::new("/music/Artist/Extras")).is_none());
}

#[test]
fn sidecar_labels_use_parent_folders() {
    let (artist, album) = sidecar_labels(Path::new("/music/Artist/0001 - Debut/pls"));
    assert_eq!(artist, "Artist");
    assert_eq!(album, "Debut");
}

#[test]
fn open_rejects_missing_or_file_roots() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    assert!(matches!(
        Library::open(&missing),
        Err(Error::LibraryNotFound(p)) if p == missing
    ));

    let file = dir.path().join("file");
    fs::write(&file, b"").unwrap();
    assert!(matches!(
        Library::open(&file),
        Err(Error::LibraryNotFound(_))
    ));
}

#[test]
fn albums_only_match_numbered_folders_two_levels_down() {
    let dir = tempdir().unwrap();
    mkdir(dir.path(), "Artist/0001 - First");
    mkdir(dir.path(), "Artist/0002 - Second");
    mkdir(dir.path(), "Artist/Extras");
    mkdir(dir.path(), "0003 - Top Level");
    mkdir(dir.path(), "Artist/0002 - Second/0004 - Too Deep");
    fs::write(dir.path().join("Artist/0005 - Not A Dir"), b"").unwrap();

    let lib = Library::open(dir.path()).unwrap();
    let mut albums: Vec<Album> = lib.albums().collect::<Result<_, _>>().unwrap();
    albums.sort_by(|a, b| a.path.cmp(&b.path));

    let titles: Vec<&str> = albums.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
    assert!(albums.iter().all(|a| a.artist == "Artist"));
    assert!(albums.iter().all(|a| a.path.is_absolute()));
}

#[test]
fn sidecars_are_found_at_any_depth_and_only_by_exact_name() {
    let dir = tempdir().unwrap();
    let a = mkdir(dir.path(), "A/0001 - One");
    let b = mkdir(dir.path(), "B/0001 - Two/CD1");
    fs::write(a.join("pls"), b"").unwrap();
    fs::write(b.join("pls"), b"").unwrap();
    fs::write(a.join("pls.bak"), b"").unwrap();
    mkdir(dir.path(), "C/0001 - Three/pls");

    let lib = Library::open(dir.path()).unwrap();
    let mut found = lib.collect_sidecars(&[]).unwrap();
    found.sort();

    assert_eq!(found, vec![a.join("pls"), b.join("pls")]);
}

#[test]
fn sidecar_filters_match_whole_path_components() {
    let dir = tempdir().unwrap();
    let one = mkdir(dir.path(), "Band/0001 - One");
    let two = mkdir(dir.path(), "Band/0002 - Two");
    let other = mkdir(dir.path(), "Band Two/0001 - Else");
    for d in [&one, &two, &other] {
        fs::write(d.join("pls"), b"").unwrap();
    }

    let lib = Library::open(dir.path()).unwrap();

    let mut by_artist = lib.collect_sidecars(&["Band".to_string()]).unwrap();
    by_artist.sort();
    assert_eq!(by_artist, vec![one.join("pls"), two.join("pls")]);

    let by_album = lib
        .collect_sidecars(&["Band/0002 - Two".to_string()])
        .unwrap();
    assert_eq!(by_album, vec![two.join("pls")]);

    let none = lib.collect_sidecars(&["Nobody".to_string()]).unwrap();
    assert!(none.is_empty());
}

#[test]
fn overlapping_filters_yield_each_sidecar_once() {
    let dir = tempdir().unwrap();
    let one = mkdir(dir.path(), "Band/0001 - One");
    fs::write(one.join("pls"), b"").unwrap();

    let lib = Library::open(dir.path()).unwrap();
    let found = lib
        .collect_sidecars(&["Band".to_string(), "Band/0001 - One".to_string()])
        .unwrap();
    assert_eq!(found, vec![one.join("pls")]);
}

#[cfg(unix)]
#[test]
fn symlink_back_to_an_ancestor_is_skipped() {
    let dir = tempdir().unwrap();
    let album = mkdir(dir.path(), "Artist/0001 - A");
    fs::write(album.join("pls"), b"01").unwrap();
    std::os::unix::fs::symlink("..", album.join("up")).unwrap();

    let lib = Library::open(dir.path()).unwrap();
    assert_eq!(lib.collect_sidecars(&[]).unwrap(), vec![album.join("pls")]);

    let albums: Vec<Album> = lib.albums().collect::<Result<_, _>>().unwrap();
    assert_eq!(albums.len(), 1);
}

#[test]
fn absolute_drops_dot_and_parent_components() {
    assert_eq!(
        absolute(Path::new("/music/./sub/../Artist/0001 - A")).unwrap(),
        Path::new("/music/Artist/0001 - A")
    );
    assert!(absolute(Path::new("relative/../x")).unwrap().is_absolute());
}

#[test]
fn open_through_parent_components_yields_clean_paths() {
    let dir = tempdir().unwrap();
    mkdir(dir.path(), "sub");
    let album = mkdir(dir.path(), "lib/Artist/0001 - A");
    fs::write(album.join("pls"), b"01").unwrap();

    let lib = Library::open(&dir.path().join("sub").join("..").join("lib")).unwrap();
    assert_eq!(lib.root(), dir.path().join("lib"));
    assert_eq!(lib.collect_sidecars(&[]).unwrap(), vec![album.join("pls")]);
}
