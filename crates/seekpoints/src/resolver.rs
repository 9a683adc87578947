//! Bookmark lookup for the configured seekpoint names.

use seekpoint_types::{Bookmark, SeekpointPair};

use crate::config::SeekpointConfig;
use crate::host::Track;

/// Resolve the two named bookmarks into an ordered pair of seconds.
///
/// Bookmarks are scanned once in host order and a later bookmark with the same
/// name replaces an earlier one. A bookmark matching `name_a` is never also
/// considered for `name_b`. If the end point does not lie strictly after the
/// start point it is dropped.
pub fn resolve(bookmarks: &[Bookmark], name_a: &str, name_b: &str) -> SeekpointPair {
    if bookmarks.is_empty() {
        return SeekpointPair::NONE;
    }

    let mut a = None;
    let mut b = None;
    for mark in bookmarks {
        if mark.name == name_a {
            a = Some(mark.time);
        } else if mark.name == name_b {
            b = Some(mark.time);
        }
    }

    let pair = SeekpointPair::ordered(a, b);
    if b.is_some() && pair.b.is_none() {
        tracing::debug!(a = ?a, b = ?b, "end point not after start point; ignoring it");
    }
    pair
}

/// Resolve seekpoints for an optional track using the configured names.
pub fn resolve_track<T: Track>(track: Option<&T>, config: &SeekpointConfig) -> SeekpointPair {
    let Some(track) = track else {
        return SeekpointPair::NONE;
    };
    resolve(track_bookmarks(track), &config.name_a, &config.name_b)
}

fn track_bookmarks<T: Track>(track: &T) -> &[Bookmark] {
    if track.has_bookmark_support() {
        track.bookmarks()
    } else {
        &[]
    }
}
