//! Preference persistence across store instances, exercising the public API
//! the way the app uses it on startup and on every toggle.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use deskdash::settings::SettingsStore;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("deskdash-it-{}-{name}", std::process::id()))
}

#[test]
fn preferences_survive_restart() {
    let path = scratch_path("restart.json");
    let _ = fs::remove_file(&path);

    {
        let mut store = SettingsStore::with_file(path.clone());
        store.set("theme", json!("light"));
        store.set("clock.mode", json!("digital"));
        store.set("clock.scale", json!(1.5));
    }

    let store = SettingsStore::with_file(path.clone());
    assert_eq!(store.get_string("theme", "dark"), "light");
    assert_eq!(store.get_string("clock.mode", "analog"), "digital");
    assert_eq!(store.get_f64("clock.scale", 1.0), 1.5);
    // untouched defaults are still served
    assert_eq!(store.get_u64("window.width", 0), 1200);

    let _ = fs::remove_file(path);
}

#[test]
fn corrupt_file_resets_to_defaults_without_error() {
    let path = scratch_path("corrupt.json");
    fs::write(&path, "theme = dark").expect("write scratch file");

    let mut store = SettingsStore::with_file(path.clone());
    assert_eq!(store.get_string("theme", ""), "dark");

    // the next write replaces the corrupt file with valid JSON
    store.set("theme", json!("light"));
    let raw = fs::read_to_string(&path).expect("settings written");
    let tree: Value = serde_json::from_str(&raw).expect("valid JSON on disk");
    assert_eq!(tree["theme"], json!("light"));

    let _ = fs::remove_file(path);
}

#[test]
fn deep_paths_create_intermediate_objects() {
    let path = scratch_path("deep.json");
    let _ = fs::remove_file(&path);

    let mut store = SettingsStore::with_file(path.clone());
    store.set("widgets.ticker.rotation_secs", json!(5));
    assert_eq!(
        store.get("widgets.ticker.rotation_secs", Value::Null),
        json!(5)
    );
    // siblings of the new branch are untouched
    assert_eq!(store.get_string("theme", ""), "dark");

    let _ = fs::remove_file(path);
}
