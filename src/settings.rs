//! User preference persistence.
//!
//! A flat JSON document with dotted-path access: `get("window.width", ..)`
//! walks nested objects, `set("clock.scale", ..)` creates intermediate
//! objects as needed and rewrites the whole file synchronously. A missing or
//! corrupt file is silently replaced by the defaults; a failed write is
//! logged and swallowed. Single-threaded access from the main loop only.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use crate::utils::get_data_dir;

pub const SETTINGS_FILE: &str = "settings.json";

pub struct SettingsStore {
    path: PathBuf,
    tree: Value,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::with_file(get_data_dir().join(SETTINGS_FILE))
    }

    pub fn with_file(path: PathBuf) -> Self {
        let tree = Self::load_or_default(&path);
        Self { path, tree }
    }

    fn load_or_default(path: &Path) -> Value {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(tree) if tree.is_object() => tree,
                Ok(_) => {
                    tracing::warn!("settings file {} is not an object, using defaults", path.display());
                    Self::default_tree()
                }
                Err(e) => {
                    tracing::warn!("failed to parse settings file {}: {e}", path.display());
                    Self::default_tree()
                }
            },
            Err(_) => Self::default_tree(),
        }
    }

    pub fn default_tree() -> Value {
        json!({
            "window": {
                "width": 1200,
                "height": 900
            },
            "theme": "dark",
            "clock": {
                "mode": "analog",
                "scale": 1.0
            },
            "location": {
                "city": "Seoul",
                "latitude": 37.5665,
                "longitude": 126.978
            }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value at a dot-delimited path, or `default` when any segment is absent
    /// or a non-object is hit mid-path. Never fails.
    pub fn get(&self, path: &str, default: Value) -> Value {
        let mut current = &self.tree;
        for segment in path.split('.') {
            match current.as_object().and_then(|map| map.get(segment)) {
                Some(next) => current = next,
                None => return default,
            }
        }
        current.clone()
    }

    pub fn get_f64(&self, path: &str, default: f64) -> f64 {
        self.get(path, Value::Null).as_f64().unwrap_or(default)
    }

    pub fn get_u64(&self, path: &str, default: u64) -> u64 {
        self.get(path, Value::Null).as_u64().unwrap_or(default)
    }

    pub fn get_string(&self, path: &str, default: &str) -> String {
        self.get(path, Value::Null)
            .as_str()
            .unwrap_or(default)
            .to_string()
    }

    /// Write the leaf at a dot-delimited path, creating (or replacing)
    /// intermediate objects, then persist the whole tree.
    pub fn set(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((leaf, parents)) = segments.split_last() else {
            return;
        };

        if !self.tree.is_object() {
            self.tree = Value::Object(Map::new());
        }
        let mut current = &mut self.tree;
        for segment in parents {
            let entry = match current.as_object_mut() {
                Some(map) => map
                    .entry((*segment).to_string())
                    .or_insert_with(|| Value::Object(Map::new())),
                None => return,
            };
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = entry;
        }
        if let Some(map) = current.as_object_mut() {
            map.insert((*leaf).to_string(), value);
        }

        self.persist();
    }

    fn persist(&self) {
        let result = serde_json::to_string_pretty(&self.tree)
            .map_err(std::io::Error::other)
            .and_then(|raw| fs::write(&self.path, raw));
        if let Err(e) = result {
            tracing::error!("failed to save settings to {}: {e}", self.path.display());
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
