//! Single-threaded dispatch of host events to the plugin.
//!
//! Host callbacks and timer ticks are funnelled through one channel and
//! handled one at a time, so plugin state needs no locking.

use std::ops::ControlFlow;

use crossbeam_channel::Receiver;

use crate::host::Player;
use crate::plugin::SeekpointsPlugin;
use crate::store::ConfigStore;
use crate::tracker::{SubscriptionId, TickScheduler};

/// Events delivered to the plugin.
#[derive(Debug, Clone)]
pub enum PluginEvent<T> {
    Enable,
    Disable,
    TrackStarted(T),
    Tick(SubscriptionId),
    Shutdown,
}

/// Handle one event. Breaks on `Shutdown`.
pub fn dispatch<P, C, S>(
    plugin: &mut SeekpointsPlugin<P, C, S>,
    event: PluginEvent<P::Track>,
) -> ControlFlow<()>
where
    P: Player,
    C: ConfigStore,
    S: TickScheduler,
{
    match event {
        PluginEvent::Enable => plugin.on_enable(),
        PluginEvent::Disable => plugin.on_disable(),
        PluginEvent::TrackStarted(track) => plugin.on_track_started(&track),
        PluginEvent::Tick(subscription) => plugin.handle_tick(subscription),
        PluginEvent::Shutdown => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

/// Process events until `Shutdown` or until every sender is gone, then
/// disable the plugin so no tracker outlives the loop.
pub fn run_event_loop<P, C, S>(
    plugin: &mut SeekpointsPlugin<P, C, S>,
    events: &Receiver<PluginEvent<P::Track>>,
) where
    P: Player,
    C: ConfigStore,
    S: TickScheduler,
{
    while let Ok(event) = events.recv() {
        if dispatch(plugin, event).is_break() {
            tracing::debug!("event loop shutdown requested");
            break;
        }
    }
    plugin.on_disable();
}
