//! Timer-thread tick source.
//!
//! Each subscription runs on its own thread and posts `PluginEvent::Tick` into
//! the event loop's channel. Timer threads never touch plugin state.

use std::collections::HashMap;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};

use crate::event_loop::PluginEvent;
use crate::tracker::{SubscriptionId, TickScheduler};

struct TimerHandle {
    // Dropping the sender disconnects the timer thread's cancel channel.
    cancel: Sender<()>,
    join: JoinHandle<()>,
}

/// Tick scheduler backed by one timer thread per subscription.
pub struct ThreadTicker<T> {
    events: Sender<PluginEvent<T>>,
    next_id: SubscriptionId,
    timers: HashMap<SubscriptionId, TimerHandle>,
    stopped: Vec<JoinHandle<()>>,
}

impl<T: Send + 'static> ThreadTicker<T> {
    pub fn new(events: Sender<PluginEvent<T>>) -> Self {
        Self {
            events,
            next_id: 0,
            timers: HashMap::new(),
            stopped: Vec::new(),
        }
    }

    /// Number of subscriptions currently running.
    pub fn live(&self) -> usize {
        self.timers.len()
    }

    /// Cancel every subscription and wait for the timer threads to exit.
    pub fn shutdown(&mut self) {
        let ids = self.timers.keys().copied().collect::<Vec<_>>();
        for id in ids {
            self.cancel(id);
        }
        for join in self.stopped.drain(..) {
            if join.join().is_err() {
                tracing::warn!("tick thread panicked");
            }
        }
    }
}

impl<T: Send + 'static> TickScheduler for ThreadTicker<T> {
    fn start(&mut self, interval: Duration) -> Result<SubscriptionId> {
        self.next_id = self.next_id.saturating_add(1);
        let id = self.next_id;
        let (cancel, cancel_rx) = crossbeam_channel::bounded::<()>(0);
        let events = self.events.clone();
        let join = std::thread::Builder::new()
            .name(format!("seekpoints-tick-{id}"))
            .spawn(move || tick_loop(id, interval, &events, &cancel_rx))
            .context("spawn tick thread")?;
        self.timers.insert(id, TimerHandle { cancel, join });
        Ok(id)
    }

    fn cancel(&mut self, id: SubscriptionId) {
        if let Some(timer) = self.timers.remove(&id) {
            drop(timer.cancel);
            self.stopped.push(timer.join);
        }
        self.stopped.retain(|join| !join.is_finished());
    }
}

impl<T> Drop for ThreadTicker<T> {
    fn drop(&mut self) {
        for (_, timer) in self.timers.drain() {
            drop(timer.cancel);
            self.stopped.push(timer.join);
        }
        for join in self.stopped.drain(..) {
            let _ = join.join();
        }
    }
}

fn tick_loop<T>(
    id: SubscriptionId,
    interval: Duration,
    events: &Sender<PluginEvent<T>>,
    cancel: &Receiver<()>,
) {
    let ticks = crossbeam_channel::tick(interval);
    loop {
        let keep_running = crossbeam_channel::select! {
            recv(ticks) -> _ => events.send(PluginEvent::Tick(id)).is_ok(),
            recv(cancel) -> _ => false,
        };
        if !keep_running {
            break;
        }
    }
    tracing::trace!(subscription = id, "tick thread exited");
}
