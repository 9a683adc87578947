use std::time::Duration;

use anyhow::{Result, anyhow};
use seekpoint_types::{Bookmark, TrackInfo};

use crate::host::Player;
use crate::tracker::{SubscriptionId, TickScheduler};

/// Scheduler that records subscriptions without running any timer.
#[derive(Debug, Default)]
pub(crate) struct ManualScheduler {
    next_id: SubscriptionId,
    live: Vec<SubscriptionId>,
    intervals: Vec<Duration>,
    fail: bool,
}

impl ManualScheduler {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn live(&self) -> &[SubscriptionId] {
        &self.live
    }

    pub(crate) fn intervals(&self) -> &[Duration] {
        &self.intervals
    }

    pub(crate) fn started(&self) -> usize {
        self.intervals.len()
    }
}

impl TickScheduler for ManualScheduler {
    fn start(&mut self, interval: Duration) -> Result<SubscriptionId> {
        if self.fail {
            return Err(anyhow!("timer unavailable"));
        }
        self.next_id += 1;
        self.live.push(self.next_id);
        self.intervals.push(interval);
        Ok(self.next_id)
    }

    fn cancel(&mut self, id: SubscriptionId) {
        self.live.retain(|live| *live != id);
    }
}

/// Player double that records every seek.
#[derive(Debug, Default)]
pub(crate) struct RecordingPlayer {
    pub(crate) track: Option<TrackInfo>,
    pub(crate) position_ms: u64,
    pub(crate) seeks: Vec<u64>,
}

impl RecordingPlayer {
    pub(crate) fn with_track(track: TrackInfo) -> Self {
        Self {
            track: Some(track),
            ..Self::default()
        }
    }
}

impl Player for RecordingPlayer {
    type Track = TrackInfo;

    fn current_track(&self) -> Option<&TrackInfo> {
        self.track.as_ref()
    }

    fn position_ms(&self) -> u64 {
        self.position_ms
    }

    fn length_ms(&self) -> u64 {
        self.track.as_ref().map_or(0, |track| track.length_ms)
    }

    fn seek_ms(&mut self, ms: u64) {
        self.position_ms = ms;
        self.seeks.push(ms);
    }
}

pub(crate) fn track(length_ms: u64, marks: &[(&str, u64)]) -> TrackInfo {
    TrackInfo {
        title: "test.flac".to_string(),
        length_ms,
        bookmarks: Some(
            marks
                .iter()
                .map(|(name, time)| Bookmark::new(*name, *time))
                .collect(),
        ),
    }
}
