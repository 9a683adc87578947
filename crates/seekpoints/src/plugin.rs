//! Seekpoint plugin lifecycle.
//!
//! Seeks to point A when a track starts and, while point B exists, polls the
//! playback position to skip to the end of the track once B is reached.

use seekpoint_types::SeekpointPair;

use crate::config::SeekpointConfig;
use crate::host::Player;
use crate::preferences::Preferences;
use crate::resolver;
use crate::store::ConfigStore;
use crate::tracker::{PlaybackTracker, SubscriptionId, TickScheduler};

pub const PLUGIN_NAME: &str = "Seekpoint Bookmarks";
pub const PLUGIN_DESCRIPTION: &str = "Store seekpoints A and/or B for tracks. \
     Skip to time A and stop after time B when a track is played. Changing the \
     names of the points does not rename existing bookmarks; it only changes \
     which bookmark names are looked up.";

const MILLIS_PER_SECOND: u64 = 1000;

/// Plugin state driven by host events and tracker ticks.
pub struct SeekpointsPlugin<P, C, S> {
    player: P,
    store: C,
    tracker: PlaybackTracker<S>,
    seekpoints: SeekpointPair,
}

impl<P, C, S> SeekpointsPlugin<P, C, S>
where
    P: Player,
    C: ConfigStore,
    S: TickScheduler,
{
    pub fn new(player: P, store: C, tracker: PlaybackTracker<S>) -> Self {
        Self {
            player,
            store,
            tracker,
            seekpoints: SeekpointPair::NONE,
        }
    }

    /// Resolve seekpoints for the loaded track and start a fresh tracker.
    pub fn on_enable(&mut self) {
        let config = SeekpointConfig::load(&self.store);
        self.seekpoints = resolver::resolve_track(self.player.current_track(), &config);
        if self.seekpoints.is_empty() {
            tracing::debug!("no seekpoints for loaded track");
        }
        self.tracker.recreate();
        tracing::info!(
            a = ?self.seekpoints.a,
            b = ?self.seekpoints.b,
            tracking = self.tracker.is_active(),
            "seekpoints enabled"
        );
    }

    pub fn on_disable(&mut self) {
        if self.tracker.destroy() {
            tracing::info!("seekpoints disabled");
        }
    }

    /// Re-resolve seekpoints for `track` and seek to its start point.
    pub fn on_track_started(&mut self, track: &P::Track) {
        // The tracker may have stopped itself on a previous track without point B.
        self.tracker.create();

        let config = SeekpointConfig::load(&self.store);
        self.seekpoints = resolver::resolve_track(Some(track), &config);
        let Some(a) = self.seekpoints.a else {
            tracing::debug!(b = ?self.seekpoints.b, "no start point for track");
            return;
        };
        tracing::info!(seconds = a, b = ?self.seekpoints.b, "seeking to start point");
        self.seek(a);
    }

    /// Tick handler: enforce point B, or stop tracking when there is none.
    pub fn on_tick(&mut self) {
        let Some(b) = self.seekpoints.b else {
            tracing::debug!("no end point for track; stopping tracker");
            self.tracker.destroy();
            return;
        };

        let position = self.player.position_ms() / MILLIS_PER_SECOND;
        if position >= b {
            let length_ms = self.player.length_ms();
            tracing::info!(position, b, length_ms, "end point reached; skipping to end");
            self.player.seek_ms(length_ms);
        }
    }

    /// Deliver a tick from `subscription`, dropping ticks of cancelled trackers.
    pub fn handle_tick(&mut self, subscription: SubscriptionId) {
        if !self.tracker.is_current(subscription) {
            tracing::trace!(subscription, "stale tick dropped");
            return;
        }
        self.on_tick();
    }

    /// Seek the host player to `seconds`.
    pub fn seek(&mut self, seconds: u64) {
        self.player
            .seek_ms(seconds.saturating_mul(MILLIS_PER_SECOND));
    }

    /// Preferences bound to this plugin's config store.
    pub fn preferences(&mut self) -> Preferences<'_, C> {
        Preferences::new(&mut self.store)
    }

    pub fn seekpoints(&self) -> SeekpointPair {
        self.seekpoints
    }

    pub fn tracker(&self) -> &PlaybackTracker<S> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut PlaybackTracker<S> {
        &mut self.tracker
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }
}
