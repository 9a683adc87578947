//! Playback tracker state.
//!
//! Owns at most one periodic tick subscription. The plugin creates it while an
//! end point may need checking and destroys it otherwise.

use std::time::Duration;

use anyhow::Result;

use crate::config::TrackerConfig;

/// Identifier of one tick subscription.
pub type SubscriptionId = u64;

/// Source of periodic ticks.
pub trait TickScheduler {
    /// Start delivering ticks every `interval` until cancelled.
    fn start(&mut self, interval: Duration) -> Result<SubscriptionId>;

    /// Stop the subscription; unknown ids are ignored.
    fn cancel(&mut self, id: SubscriptionId);
}

/// Live tracker subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerHandle {
    subscription: SubscriptionId,
}

impl TrackerHandle {
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrackerState {
    Absent,
    Active(TrackerHandle),
}

/// Periodic position tracker backed by a tick scheduler.
#[derive(Debug)]
pub struct PlaybackTracker<S> {
    scheduler: S,
    config: TrackerConfig,
    state: TrackerState,
}

impl<S: TickScheduler> PlaybackTracker<S> {
    pub fn new(scheduler: S, config: TrackerConfig) -> Self {
        Self {
            scheduler,
            config,
            state: TrackerState::Absent,
        }
    }

    /// Start a subscription unless one is already live.
    pub fn create(&mut self) {
        if self.is_active() {
            return;
        }
        self.subscribe();
    }

    /// Replace any live subscription with a fresh one.
    pub fn recreate(&mut self) {
        self.destroy();
        self.subscribe();
    }

    /// Cancel the live subscription. Returns `false` if there was none.
    pub fn destroy(&mut self) -> bool {
        match std::mem::replace(&mut self.state, TrackerState::Absent) {
            TrackerState::Active(handle) => {
                self.scheduler.cancel(handle.subscription);
                tracing::debug!(subscription = handle.subscription, "tracker destroyed");
                true
            }
            TrackerState::Absent => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TrackerState::Active(_))
    }

    pub fn handle(&self) -> Option<TrackerHandle> {
        match self.state {
            TrackerState::Active(handle) => Some(handle),
            TrackerState::Absent => None,
        }
    }

    /// Whether a tick from `subscription` belongs to the live subscription.
    pub fn is_current(&self, subscription: SubscriptionId) -> bool {
        self.handle()
            .is_some_and(|handle| handle.subscription == subscription)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn subscribe(&mut self) {
        match self.scheduler.start(self.config.tick_interval) {
            Ok(subscription) => {
                tracing::debug!(
                    subscription,
                    interval_ms = self.config.tick_interval.as_millis() as u64,
                    "tracker created"
                );
                self.state = TrackerState::Active(TrackerHandle { subscription });
            }
            Err(e) => {
                tracing::warn!("tracker start failed: {e:#}");
                self.state = TrackerState::Absent;
            }
        }
    }
}
