use designkit::storage::Storage;
use designkit::theme::ThemeMode;
use designkit::{open_storage, Config, DesignKitError, Palette};
use std::io::Write;

#[test]
fn partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size = 25\nsortable = false\ntrace_level = \"debug\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.page_size, 25);
    assert!(!config.sortable);
    assert!(config.filterable);
    assert_eq!(config.page_siblings, 1);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));

    let options = config.table_options().unwrap();
    assert_eq!(options.page_size, 25);
    assert!(!options.sortable);
    assert!(!config.theme_options().persist_on_auto_resolve);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size = \"many\"").unwrap();

    assert!(matches!(Config::from_file(file.path()), Err(DesignKitError::Config(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::from_file(dir.path().join("absent.toml")),
        Err(DesignKitError::Io(_))
    ));
}

#[test]
fn custom_palettes_apply_per_mode() {
    let dir = tempfile::tempdir().unwrap();
    let write_palette = |file: &str, name: &str, base: Palette| {
        let path = dir.path().join(file);
        let mut custom = base;
        custom.name = name.to_string();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();
        path.to_string_lossy().into_owned()
    };

    let config = Config {
        light_palette_file: Some(write_palette("light.toml", "paper", Palette::light())),
        dark_palette_file: Some(write_palette("dark.toml", "midnight", Palette::dark())),
        ..Config::default()
    };
    assert_eq!(config.palette(ThemeMode::Light).name, "paper");
    assert_eq!(config.palette(ThemeMode::Dark).name, "midnight");

    let light_only = Config {
        dark_palette_file: None,
        ..config
    };
    assert_eq!(light_only.palette(ThemeMode::Dark), Palette::dark());
}

#[test]
fn open_storage_falls_back_to_memory_on_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{not json").unwrap();

    let config = Config {
        storage_path: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    };
    let mut storage = open_storage(&config);
    storage.set("theme", "dark").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}
