use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use toml::{Table, Value};

use crate::app::types::ThemePreference;
use crate::errors::SettingsError;

/// User preferences persisted in `config.toml`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub theme: ThemePreference,
    /// Per-action key overrides, e.g. `toggle_theme = ["t", "F2"]`.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Settings {
    /// Write these settings into `doc`, leaving unrelated keys alone.
    ///
    /// `theme` is always replaced. Keybind actions already present in
    /// `doc` are kept as the user wrote them, even if they are malformed.
    pub fn merge_into(&self, doc: &mut Table) -> Result<(), SettingsError> {
        doc.insert("theme".to_string(), Value::try_from(self.theme)?);
        if self.keybinds.is_empty() {
            return Ok(());
        }
        let binds = doc
            .entry("keybinds")
            .or_insert(Value::Table(Table::new()));
        if let Value::Table(binds) = binds {
            for (action, keys) in &self.keybinds {
                if !binds.contains_key(action) {
                    binds.insert(action.clone(), Value::try_from(keys)?);
                }
            }
        }
        Ok(())
    }
}

/// Write `settings` to `path` as a fresh document.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let mut doc = Table::new();
    settings.merge_into(&mut doc)?;
    save_document(path, &doc)
}

/// Write `doc` to `path`, creating parent directories as needed.
///
/// The file is written to a sibling temp file first and then renamed over
/// the target so a crash never leaves a truncated settings file.
pub fn save_document(path: &Path, doc: &Table) -> Result<(), SettingsError> {
    let io_err = |source: std::io::Error| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    let text = toml::to_string(doc)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let tmp = path.with_extension("toml.tmp");
    {
        let mut f = std::fs::File::create(&tmp).map_err(io_err)?;
        f.write_all(text.as_bytes()).map_err(io_err)?;
        f.sync_all().map_err(io_err)?;
    }
    std::fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}
