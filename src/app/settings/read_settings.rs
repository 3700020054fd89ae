use std::io::ErrorKind;
use std::path::Path;
use toml::{Table, Value};
use tracing::warn;

use super::write_settings::Settings;
use crate::app::types::ThemePreference;
use crate::errors::SettingsError;

/// Read the raw settings document at `path`. A missing file yields `None`;
/// unreadable files and TOML syntax errors are returned to the caller.
pub fn read_document(path: &Path) -> Result<Option<Table>, SettingsError> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Extract settings key by key. A malformed entry is logged and skipped;
/// it never discards the entries around it.
pub fn settings_from_document(doc: &Table) -> Settings {
    let mut settings = Settings::default();

    if let Some(value) = doc.get("theme") {
        match value.clone().try_into::<ThemePreference>() {
            Ok(theme) => settings.theme = theme,
            Err(e) => warn!("ignoring `theme` setting: {e}"),
        }
    }

    match doc.get("keybinds") {
        None => {}
        Some(Value::Table(binds)) => {
            for (action, keys) in binds {
                match keys.clone().try_into::<Vec<String>>() {
                    Ok(keys) => {
                        settings.keybinds.insert(action.clone(), keys);
                    }
                    Err(e) => warn!(action = %action, "ignoring keybind entry: {e}"),
                }
            }
        }
        Some(other) => warn!(found = other.type_str(), "ignoring `keybinds`: expected a table"),
    }

    settings
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    Ok(read_document(path)?
        .map(|doc| settings_from_document(&doc))
        .unwrap_or_default())
}
