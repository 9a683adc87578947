//! Headless model of the plugin's preferences pane.
//!
//! Two free-text fields, each bound to one config key and written through on
//! every change.

use anyhow::Result;

use crate::config::{DEFAULT_A_NAME, DEFAULT_B_NAME, KEY_SEEKPOINT_A_NAME, KEY_SEEKPOINT_B_NAME};
use crate::store::ConfigStore;

/// Editable preference fields, in display order.
pub const FIELDS: [PreferenceField; 2] = [PreferenceField::SeekpointA, PreferenceField::SeekpointB];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceField {
    SeekpointA,
    SeekpointB,
}

impl PreferenceField {
    pub fn key(self) -> &'static str {
        match self {
            Self::SeekpointA => KEY_SEEKPOINT_A_NAME,
            Self::SeekpointB => KEY_SEEKPOINT_B_NAME,
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            Self::SeekpointA => DEFAULT_A_NAME,
            Self::SeekpointB => DEFAULT_B_NAME,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SeekpointA => "Bookmark name for point A",
            Self::SeekpointB => "Bookmark name for point B",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::SeekpointA => {
                "Bookmark name to check for when a track is started, and if found \
                 the player seeks to that timestamp"
            }
            Self::SeekpointB => {
                "Bookmark name to check each tick while a track plays. If the \
                 current position exceeds the timestamp, seek to the end of the track."
            }
        }
    }
}

/// Preferences bound to a config store.
pub struct Preferences<'a, C: ?Sized> {
    store: &'a mut C,
}

impl<'a, C: ConfigStore + ?Sized> Preferences<'a, C> {
    pub fn new(store: &'a mut C) -> Self {
        Self { store }
    }

    /// Text currently shown in `field`.
    pub fn current_text(&self, field: PreferenceField) -> String {
        self.store.get_string(field.key(), field.default_text())
    }

    /// Store `text` for `field`.
    pub fn set_text(&mut self, field: PreferenceField, text: &str) -> Result<()> {
        self.store.set_string(field.key(), text)?;
        tracing::info!(key = field.key(), text, "seekpoint name updated");
        Ok(())
    }

    /// Change handler for an entry; failures are logged, not surfaced.
    pub fn on_entry_changed(&mut self, field: PreferenceField, text: &str) {
        if let Err(e) = self.set_text(field, text) {
            tracing::warn!(key = field.key(), "failed to store preference: {e:#}");
        }
    }
}
