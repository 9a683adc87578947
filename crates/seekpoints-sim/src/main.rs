//! Seekpoints simulator: runs the seekpoint plugin against a simulated player.
//!
//! ## Modes
//! - `play`: load a track description, enable the plugin, start the track and
//!   let the tracker enforce the end point until the track finishes.
//! - `prefs`: show or edit the bookmark names stored in the config file.

mod cli;
mod player;
mod track;

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::Sender;
use seekpoint_types::TrackInfo;
use seekpoints::config::{PLUGIN_ID, TrackerConfig};
use seekpoints::event_loop::{PluginEvent, run_event_loop};
use seekpoints::plugin::{PLUGIN_DESCRIPTION, PLUGIN_NAME, SeekpointsPlugin};
use seekpoints::preferences::{FIELDS, PreferenceField, Preferences};
use seekpoints::store::TomlConfigStore;
use seekpoints::ticker::ThreadTicker;
use seekpoints::tracker::PlaybackTracker;
use tracing_subscriber::EnvFilter;

use crate::player::{SimClock, SimPlayer};

const END_POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let args = cli::Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,seekpoints=info")),
        )
        .init();

    match args.cmd {
        cli::Command::Play {
            track: track_path,
            tick_ms,
            speed,
            max_seconds,
        } => {
            let track = track::load_track(&track_path)?;
            run_play(&args.config, track, tick_ms, speed, max_seconds)
        }
        cli::Command::Prefs { action } => run_prefs(&args.config, action),
    }
}

/// Play one track through the plugin until it ends or the run is cut short.
fn run_play(
    config: &Path,
    track: TrackInfo,
    tick_ms: u64,
    speed: u32,
    max_seconds: Option<u64>,
) -> Result<()> {
    let (events_tx, events_rx) = crossbeam_channel::unbounded::<PluginEvent<TrackInfo>>();

    let player = SimPlayer::new(track.clone(), speed);
    let clock = player.clock();
    let tracker = PlaybackTracker::new(
        ThreadTicker::new(events_tx.clone()),
        TrackerConfig {
            tick_interval: Duration::from_millis(tick_ms.max(1)),
        },
    );
    let store = TomlConfigStore::new(config, PLUGIN_ID);
    let mut plugin = SeekpointsPlugin::new(player, store, tracker);

    let tx = events_tx.clone();
    ctrlc::set_handler(move || {
        let _ = tx.send(PluginEvent::Shutdown);
    })
    .context("install ctrl-c handler")?;

    spawn_end_watcher(clock.clone(), events_tx.clone());
    if let Some(seconds) = max_seconds {
        let tx = events_tx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs(seconds));
            tracing::info!(seconds, "time limit reached");
            let _ = tx.send(PluginEvent::Shutdown);
        });
    }

    tracing::info!(
        title = %track.title,
        length_ms = track.length_ms,
        config = ?config,
        "simulation started"
    );
    events_tx
        .send(PluginEvent::Enable)
        .context("queue enable event")?;
    events_tx
        .send(PluginEvent::TrackStarted(track))
        .context("queue track start event")?;
    drop(events_tx);

    run_event_loop(&mut plugin, &events_rx);
    plugin.tracker_mut().scheduler_mut().shutdown();

    let position_ms = clock.lock().map(|c| c.position_ms()).unwrap_or(0);
    tracing::info!(position_ms, "simulation finished");
    Ok(())
}

/// Post `Shutdown` once the simulated track has played to its end.
fn spawn_end_watcher(clock: Arc<Mutex<SimClock>>, events: Sender<PluginEvent<TrackInfo>>) {
    std::thread::spawn(move || {
        loop {
            std::thread::sleep(END_POLL_INTERVAL);
            let finished = clock.lock().map(|c| c.finished()).unwrap_or(true);
            if finished {
                tracing::info!("track finished");
                let _ = events.send(PluginEvent::Shutdown);
                break;
            }
        }
    });
}

fn run_prefs(config: &Path, action: cli::PrefsAction) -> Result<()> {
    let mut store = TomlConfigStore::new(config, PLUGIN_ID);
    let location = store.path().display().to_string();
    let mut prefs = Preferences::new(&mut store);
    match action {
        cli::PrefsAction::Show => {
            println!("{PLUGIN_NAME} ({location})");
            println!("{PLUGIN_DESCRIPTION}");
            for field in FIELDS {
                println!("  {}: {}", field.label(), prefs.current_text(field));
            }
        }
        cli::PrefsAction::SetA { name } => {
            prefs.set_text(PreferenceField::SeekpointA, &name)?;
            println!("point A bookmark name set to {name:?} in {location}");
        }
        cli::PrefsAction::SetB { name } => {
            prefs.set_text(PreferenceField::SeekpointB, &name)?;
            println!("point B bookmark name set to {name:?} in {location}");
        }
    }
    Ok(())
}
