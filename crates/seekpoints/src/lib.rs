//! Seekpoint bookmarks for a media player host.
//!
//! Resolves two named bookmarks of the playing track into a start point and an
//! end point, seeks to the start point when the track starts, and skips to the
//! end of the track once playback passes the end point.

pub mod config;
pub mod event_loop;
pub mod host;
pub mod plugin;
pub mod preferences;
pub mod resolver;
pub mod store;
pub mod ticker;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_support;
