//! Playlist resolution: sidecar prefixes to audio files, albums to playlists.

mod definition;
pub mod m3u;
mod resolve;

pub use definition::*;
pub use resolve::*;
