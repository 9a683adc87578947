use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seekpoints-sim", version)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// TOML file holding plugin settings
    #[arg(long, default_value = "seekpoints.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate playback of one track with the plugin enabled
    Play {
        /// Track description (title, length_ms, optional [[bookmarks]])
        track: PathBuf,

        /// Tracker poll interval in milliseconds
        #[arg(long, default_value_t = 200)]
        tick_ms: u64,

        /// Playback speed multiplier (useful for long tracks)
        #[arg(long, default_value_t = 1)]
        speed: u32,

        /// Stop the simulation after this many wall-clock seconds
        #[arg(long)]
        max_seconds: Option<u64>,
    },

    /// Show or change the bookmark names the plugin looks for
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Print both bookmark names
    Show,
    /// Set the bookmark name for point A
    SetA { name: String },
    /// Set the bookmark name for point B
    SetB { name: String },
}
