//! Host player contracts consumed by the plugin.
//!
//! The plugin never owns playback; it reads position/length and issues seeks
//! through these traits.

use seekpoint_types::{Bookmark, TrackInfo};

/// A track as exposed by the host.
pub trait Track {
    /// Bookmarks stored for this track, in host order.
    fn bookmarks(&self) -> &[Bookmark];

    /// Whether the track's format can carry bookmarks at all.
    fn has_bookmark_support(&self) -> bool {
        true
    }
}

/// Playback engine of the host.
pub trait Player {
    type Track: Track;

    /// Currently loaded track, if any.
    fn current_track(&self) -> Option<&Self::Track>;

    /// Playback position in milliseconds.
    fn position_ms(&self) -> u64;

    /// Length of the current track in milliseconds.
    fn length_ms(&self) -> u64;

    /// Seek the current track to `ms` milliseconds.
    fn seek_ms(&mut self, ms: u64);
}

impl Track for TrackInfo {
    fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.as_deref().unwrap_or(&[])
    }

    fn has_bookmark_support(&self) -> bool {
        self.bookmarks.is_some()
    }
}
