use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pls", version)]
#[command(about = "Manage per-album `pls` sidecars and generate M3U playlists from them")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a blank config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the current configuration
    Info,

    /// Create empty `pls` files in albums missing one
    Add {
        /// Path to library
        library: Option<PathBuf>,
    },

    /// Remove empty `pls` files from the library
    Prune {
        /// Path to library
        library: Option<PathBuf>,
    },

    /// List the prefixes of every non-empty `pls` file
    List {
        /// Path to library
        library: Option<PathBuf>,

        /// Also show prefixes that match no audio file
        #[arg(short, long)]
        unresolved: bool,
    },

    /// Sort every non-empty `pls` file in place
    Format {
        /// Path to library
        library: Option<PathBuf>,
    },

    /// Generate M3U playlists
    Generate {
        /// Path to library
        library: Option<PathBuf>,

        /// Path to playlist JSON map
        #[arg(short = 'c', value_name = "PLAYLIST")]
        config: Option<PathBuf>,

        /// Playlists output folder
        #[arg(short = 'o', value_name = "FOLDER")]
        output: Option<PathBuf>,

        /// Only generate this playlist from the config
        #[arg(short = 'p', long = "playlist", value_name = "PLAYLIST")]
        playlist: Option<String>,

        /// Warn about prefixes that match no audio file
        #[arg(short, long)]
        unresolved: bool,
    },
}
