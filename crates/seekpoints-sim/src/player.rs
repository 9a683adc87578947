//! Wall-clock player used by the simulator.
//!
//! Position advances with real time (scaled by `speed`) from the last seek and
//! stops at the end of the track.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use seekpoint_types::TrackInfo;
use seekpoints::host::Player;

/// Playback clock shared with the end-of-track watcher.
#[derive(Debug)]
pub struct SimClock {
    started: Instant,
    offset_ms: u64,
    speed: u32,
    length_ms: u64,
}

impl SimClock {
    pub fn new(length_ms: u64, speed: u32) -> Self {
        Self {
            started: Instant::now(),
            offset_ms: 0,
            speed: speed.max(1),
            length_ms,
        }
    }

    pub fn position_ms(&self) -> u64 {
        let elapsed = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.offset_ms
            .saturating_add(elapsed.saturating_mul(self.speed as u64))
            .min(self.length_ms)
    }

    pub fn seek(&mut self, ms: u64) {
        self.offset_ms = ms.min(self.length_ms);
        self.started = Instant::now();
    }

    pub fn finished(&self) -> bool {
        self.position_ms() >= self.length_ms
    }
}

/// Host player with a single loaded track.
pub struct SimPlayer {
    track: TrackInfo,
    clock: Arc<Mutex<SimClock>>,
}

impl SimPlayer {
    pub fn new(track: TrackInfo, speed: u32) -> Self {
        let clock = SimClock::new(track.length_ms, speed);
        Self {
            track,
            clock: Arc::new(Mutex::new(clock)),
        }
    }

    pub fn clock(&self) -> Arc<Mutex<SimClock>> {
        self.clock.clone()
    }
}

impl Player for SimPlayer {
    type Track = TrackInfo;

    fn current_track(&self) -> Option<&TrackInfo> {
        Some(&self.track)
    }

    fn position_ms(&self) -> u64 {
        self.clock.lock().map(|c| c.position_ms()).unwrap_or(0)
    }

    fn length_ms(&self) -> u64 {
        self.track.length_ms
    }

    fn seek_ms(&mut self, ms: u64) {
        if let Ok(mut clock) = self.clock.lock() {
            clock.seek(ms);
        }
        tracing::info!(seek_ms = ms, title = %self.track.title, "player seek");
    }
}
