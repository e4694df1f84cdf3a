use designkit::storage::{JsonStorage, MemoryStorage, Storage};
use designkit::theme::{DarkModeFlag, ResolutionSource, ThemeMode, ThemeOptions, ThemeStore, THEME_STORAGE_KEY};
use designkit::{DesignKitError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Storage whose contents stay observable after the store takes ownership.
#[derive(Clone, Default)]
struct SharedStorage(Arc<Mutex<BTreeMap<String, String>>>);

impl SharedStorage {
    fn value(&self, key: &str) -> Option<String> {
        self.0.lock().unwrap().get(key).cloned()
    }
}

impl Storage for SharedStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.0.lock().unwrap().remove(key);
        Ok(())
    }
}

struct FailingStorage;

impl Storage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(DesignKitError::Storage("unavailable".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(DesignKitError::Storage("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Err(DesignKitError::Storage("unavailable".to_string()))
    }
}

#[test]
fn double_toggle_restores_mode_and_marker() {
    let flag = DarkModeFlag::default();
    let mut store = ThemeStore::initialize(MemoryStorage::new(), &|| false, flag.clone(), ThemeOptions::default());

    assert_eq!(store.toggle_theme(), ThemeMode::Dark);
    assert!(flag.is_dark());
    assert_eq!(store.toggle_theme(), ThemeMode::Light);
    assert!(!flag.is_dark());
    assert_eq!(store.theme(), ThemeMode::Light);
}

#[test]
fn dark_signal_without_stored_value_resolves_dark() {
    let flag = DarkModeFlag::default();
    let store = ThemeStore::initialize(MemoryStorage::new(), &|| true, flag.clone(), ThemeOptions::default());

    assert_eq!(store.theme(), ThemeMode::Dark);
    assert_eq!(store.source(), ResolutionSource::Environment);
    assert!(flag.is_dark());
}

#[test]
fn persisted_value_wins_over_environment() {
    let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, "dark");
    let flag = DarkModeFlag::default();
    let store = ThemeStore::initialize(storage, &|| false, flag.clone(), ThemeOptions::default());

    assert_eq!(store.theme(), ThemeMode::Dark);
    assert_eq!(store.source(), ResolutionSource::Persisted);
    assert_eq!(flag.mode(), ThemeMode::Dark);
}

#[test]
fn auto_resolved_mode_is_not_persisted_by_default() {
    let storage = SharedStorage::default();
    let mut store = ThemeStore::initialize(storage.clone(), &|| true, |_: ThemeMode| {}, ThemeOptions::default());
    assert_eq!(storage.value(THEME_STORAGE_KEY), None);

    store.toggle_theme();
    assert_eq!(storage.value(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn auto_resolved_mode_is_persisted_when_enabled() {
    let storage = SharedStorage::default();
    let options = ThemeOptions {
        persist_on_auto_resolve: true,
    };
    let _store = ThemeStore::initialize(storage.clone(), &|| true, |_: ThemeMode| {}, options);

    assert_eq!(storage.value(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn storage_failures_are_not_fatal() {
    let flag = DarkModeFlag::default();
    let mut store = ThemeStore::initialize(FailingStorage, &|| true, flag.clone(), ThemeOptions::default());

    assert_eq!(store.theme(), ThemeMode::Dark);
    assert!(store.is_degraded());

    assert_eq!(store.toggle_theme(), ThemeMode::Light);
    assert_eq!(store.theme(), ThemeMode::Light);
    assert!(!flag.is_dark());
    assert!(store.is_degraded());
}

#[test]
fn choice_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let storage = JsonStorage::new(path.clone()).unwrap();
        let mut store = ThemeStore::initialize(storage, &|| false, |_: ThemeMode| {}, ThemeOptions::default());
        assert!(store.set_theme(ThemeMode::Dark));
        assert!(!store.is_degraded());
    }

    let storage = JsonStorage::new(path.clone()).unwrap();
    assert!(storage.record(THEME_STORAGE_KEY).is_some());

    let store = ThemeStore::initialize(storage, &|| false, DarkModeFlag::default(), ThemeOptions::default());
    assert_eq!(store.theme(), ThemeMode::Dark);
    assert_eq!(store.source(), ResolutionSource::Persisted);

    let contents = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["entries"]["theme"]["value"], "dark");
}

#[test]
fn corrupt_preference_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(JsonStorage::new(path), Err(DesignKitError::Storage(_))));
}
