use std::time::Duration;

use crate::store::ConfigStore;

/// Identity under which the plugin's settings are persisted.
pub const PLUGIN_ID: &str = "Seekpoints";

/// Config key holding the bookmark name of the start point.
pub const KEY_SEEKPOINT_A_NAME: &str = "seekpoint_name_a";
/// Config key holding the bookmark name of the end point.
pub const KEY_SEEKPOINT_B_NAME: &str = "seekpoint_name_b";

pub const DEFAULT_A_NAME: &str = "A";
pub const DEFAULT_B_NAME: &str = "B";

/// Bookmark names the plugin looks for on each track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeekpointConfig {
    /// Bookmark name of the point to seek to when a track starts.
    pub name_a: String,
    /// Bookmark name of the point after which the track is skipped to its end.
    pub name_b: String,
}

impl Default for SeekpointConfig {
    fn default() -> Self {
        Self {
            name_a: DEFAULT_A_NAME.to_string(),
            name_b: DEFAULT_B_NAME.to_string(),
        }
    }
}

impl SeekpointConfig {
    /// Read both names from the store, falling back to the defaults.
    pub fn load<C: ConfigStore + ?Sized>(store: &C) -> Self {
        Self {
            name_a: store.get_string(KEY_SEEKPOINT_A_NAME, DEFAULT_A_NAME),
            name_b: store.get_string(KEY_SEEKPOINT_B_NAME, DEFAULT_B_NAME),
        }
    }
}

/// Polling parameters for the playback tracker.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// Interval between ticks while the tracker is active.
    pub tick_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
        }
    }
}
