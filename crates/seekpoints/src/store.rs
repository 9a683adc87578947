//! Persisted plugin settings.
//!
//! Provides the config store contract plus an in-memory store and a TOML file
//! store that keeps each plugin's values under `[plugins.<id>]`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// String key/value settings scoped to one plugin.
pub trait ConfigStore {
    /// Return the stored value for `key`, or `default` when unset.
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Persist `value` under `key`.
    fn set_string(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings kept in memory for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfigStore {
    values: HashMap<String, String>,
}

impl ConfigStore for MemoryConfigStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings stored in a TOML file shared with other plugins.
///
/// Every read goes to disk so edits made elsewhere are picked up on the next
/// lookup. Writes only touch this plugin's table.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
    section: String,
}

impl TomlConfigStore {
    /// Create a store for `plugin_id` backed by `path`; the file may not exist yet.
    pub fn new(path: impl Into<PathBuf>, plugin_id: &str) -> Self {
        Self {
            path: path.into(),
            section: plugin_id.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<toml_edit::DocumentMut> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("read config {:?}", self.path));
            }
        };
        raw.parse::<toml_edit::DocumentMut>()
            .with_context(|| format!("parse config {:?}", self.path))
    }

    fn lookup(&self, doc: &toml_edit::DocumentMut, key: &str) -> Option<String> {
        doc.get("plugins")
            .and_then(|plugins| plugins.get(self.section.as_str()))
            .and_then(|section| section.get(key))
            .and_then(|item| item.as_str())
            .map(str::to_string)
    }
}

impl ConfigStore for TomlConfigStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.read_document() {
            Ok(doc) => self
                .lookup(&doc, key)
                .unwrap_or_else(|| default.to_string()),
            Err(e) => {
                tracing::warn!(key, "config read failed, using default: {e:#}");
                default.to_string()
            }
        }
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        let mut doc = self.read_document()?;

        let plugins = doc
            .entry("plugins")
            .or_insert(toml_edit::table())
            .as_table_mut()
            .ok_or_else(|| anyhow!("`plugins` in {:?} is not a table", self.path))?;
        plugins.set_implicit(true);
        let section = plugins
            .entry(self.section.as_str())
            .or_insert(toml_edit::table())
            .as_table_mut()
            .ok_or_else(|| {
                anyhow!(
                    "`plugins.{}` in {:?} is not a table",
                    self.section,
                    self.path
                )
            })?;
        section[key] = toml_edit::value(value);

        std::fs::write(&self.path, doc.to_string())
            .with_context(|| format!("write config {:?}", self.path))?;
        tracing::debug!(key, value, path = ?self.path, "config value stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "seekpoints-store-{}-{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = std::fs::create_dir_all(&root);
        root.join("config.toml")
    }

    #[test]
    fn memory_store_returns_default_until_set() {
        let mut store = MemoryConfigStore::default();
        assert_eq!(store.get_string("name", "A"), "A");

        store.set_string("name", "intro").unwrap();
        assert_eq!(store.get_string("name", "A"), "intro");
    }

    #[test]
    fn toml_store_missing_file_reads_defaults() {
        let path = temp_config_path("missing");
        let store = TomlConfigStore::new(&path, "Seekpoints");
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.get_string("seekpoint_name_a", "A"), "A");
        assert!(!path.exists());
    }

    #[test]
    fn toml_store_creates_file_on_first_write() {
        let path = temp_config_path("create");
        let mut store = TomlConfigStore::new(&path, "Seekpoints");

        store.set_string("seekpoint_name_a", "start").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("[plugins.Seekpoints]"));
        assert!(raw.contains("seekpoint_name_a = \"start\""));
        assert_eq!(store.get_string("seekpoint_name_a", "A"), "start");
    }

    #[test]
    fn toml_store_preserves_unrelated_content() {
        let path = temp_config_path("preserve");
        std::fs::write(
            &path,
            "# player settings\nvolume = 80\n\n[plugins.Other]\nenabled = true\n",
        )
        .unwrap();
        let mut store = TomlConfigStore::new(&path, "Seekpoints");

        store.set_string("seekpoint_name_b", "stop").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("# player settings"));
        assert!(raw.contains("volume = 80"));
        assert!(raw.contains("[plugins.Other]"));
        assert_eq!(store.get_string("seekpoint_name_b", "B"), "stop");
    }

    #[test]
    fn toml_store_is_scoped_by_plugin_id() {
        let path = temp_config_path("scoped");
        let mut ours = TomlConfigStore::new(&path, "Seekpoints");
        let theirs = TomlConfigStore::new(&path, "Other");

        ours.set_string("seekpoint_name_a", "start").unwrap();

        assert_eq!(theirs.get_string("seekpoint_name_a", "A"), "A");
    }

    #[test]
    fn toml_store_reads_external_edits() {
        let path = temp_config_path("external");
        let store = TomlConfigStore::new(&path, "Seekpoints");
        std::fs::write(&path, "[plugins.Seekpoints]\nseekpoint_name_a = \"cue\"\n").unwrap();

        assert_eq!(store.get_string("seekpoint_name_a", "A"), "cue");
    }

    #[test]
    fn toml_store_invalid_file_falls_back_to_default() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, "this is = = not toml").unwrap();
        let mut store = TomlConfigStore::new(&path, "Seekpoints");

        assert_eq!(store.get_string("seekpoint_name_a", "A"), "A");
        assert!(store.set_string("seekpoint_name_a", "x").is_err());
    }

    #[test]
    fn toml_store_rejects_non_table_plugins_entry() {
        let path = temp_config_path("not-table");
        std::fs::write(&path, "plugins = 3\n").unwrap();
        let mut store = TomlConfigStore::new(&path, "Seekpoints");

        assert!(store.set_string("seekpoint_name_a", "x").is_err());
    }
}
