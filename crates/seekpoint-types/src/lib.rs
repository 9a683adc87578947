use serde::{Deserialize, Serialize};

/// Named position stored per track by the host player.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    /// Label entered by the user (for example `A`).
    pub name: String,
    /// Position in whole seconds from the start of the track.
    pub time: u64,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, time: u64) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }
}

/// Start/stop positions resolved for one track.
///
/// When both points are present `a` is strictly before `b`; a pair that would
/// violate this keeps only `a`. An end point at 0 s is never kept.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeekpointPair {
    /// Seconds to jump to when the track starts.
    pub a: Option<u64>,
    /// Seconds after which playback skips to the end of the track.
    pub b: Option<u64>,
}

impl SeekpointPair {
    /// Pair with neither point set.
    pub const NONE: Self = Self { a: None, b: None };

    /// Build a pair, dropping `b` unless it lies strictly after `a` and after
    /// the start of the track.
    pub fn ordered(a: Option<u64>, b: Option<u64>) -> Self {
        match (a, b) {
            (_, Some(0)) => Self { a, b: None },
            (Some(start), Some(end)) if start >= end => Self { a, b: None },
            _ => Self { a, b },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_none() && self.b.is_none()
    }
}

/// Serializable description of a track as seen by the plugin.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackInfo {
    /// Display title or path.
    pub title: String,
    /// Total duration in milliseconds.
    pub length_ms: u64,
    /// Stored bookmarks; `None` when the track format cannot carry bookmarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<Vec<Bookmark>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_keeps_increasing_pair() {
        let pair = SeekpointPair::ordered(Some(5), Some(20));
        assert_eq!(pair, SeekpointPair { a: Some(5), b: Some(20) });
    }

    #[test]
    fn ordered_drops_b_when_not_after_a() {
        assert_eq!(SeekpointPair::ordered(Some(10), Some(10)).b, None);
        assert_eq!(SeekpointPair::ordered(Some(20), Some(5)).b, None);
        assert_eq!(SeekpointPair::ordered(Some(20), Some(5)).a, Some(20));
    }

    #[test]
    fn ordered_drops_b_at_track_start() {
        assert_eq!(SeekpointPair::ordered(None, Some(0)), SeekpointPair::NONE);
        assert_eq!(SeekpointPair::ordered(Some(0), Some(0)).a, Some(0));
        assert_eq!(SeekpointPair::ordered(Some(0), Some(0)).b, None);
    }

    #[test]
    fn ordered_keeps_lone_points() {
        assert_eq!(SeekpointPair::ordered(None, Some(7)).b, Some(7));
        assert_eq!(SeekpointPair::ordered(Some(7), None).a, Some(7));
        assert!(SeekpointPair::ordered(None, None).is_empty());
    }

    #[test]
    fn track_info_without_bookmarks_omits_field() {
        let track = TrackInfo {
            title: "song.ogg".to_string(),
            length_ms: 1000,
            bookmarks: None,
        };
        let json = serde_json::to_string(&track).unwrap();
        assert!(!json.contains("bookmarks"));

        let parsed: TrackInfo =
            serde_json::from_str(r#"{"title":"song.ogg","length_ms":1000}"#).unwrap();
        assert_eq!(parsed, track);
    }
}
