use std::path::{Path, PathBuf};
use toml::Table;
use tracing::{debug, warn};

use super::config_dirs::{self, THEMES_DIR};
use super::read_settings::{read_document, settings_from_document};
use super::write_settings::{save_document, Settings};
use crate::errors::SettingsError;

/// Durable home of the settings file.
///
/// An ephemeral store has no backing file: loads return defaults and saves
/// succeed without touching disk. A durable store remembers the document
/// it last read so a save only rewrites the keys it owns.
#[derive(Clone, Debug, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    document: Table,
    /// The file could not be read or parsed; it is moved aside before the
    /// next save instead of being overwritten.
    unreadable: bool,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        SettingsStore {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn ephemeral() -> Self {
        Self::default()
    }

    /// `config.toml` in the platform config directory, or ephemeral when
    /// the platform has none.
    pub fn default_location() -> Self {
        match config_dirs::default_settings_path() {
            Some(p) => Self::at(p),
            None => {
                warn!("no config directory available; preferences will not persist");
                Self::ephemeral()
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Where an unreadable settings file is moved before it is replaced.
    pub fn backup_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(|p| p.with_extension("toml.bak"))
    }

    pub fn is_unreadable(&self) -> bool {
        self.unreadable
    }

    /// Directory holding optional palette overrides.
    pub fn themes_dir(&self) -> Option<PathBuf> {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| dir.join(THEMES_DIR))
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load(&mut self) -> Settings {
        let Some(path) = self.path.clone() else {
            return Settings::default();
        };
        match read_document(&path) {
            Ok(doc) => {
                self.unreadable = false;
                self.document = doc.unwrap_or_default();
                let s = settings_from_document(&self.document);
                debug!(path = %path.display(), theme = %s.theme, "loaded settings");
                s
            }
            Err(e) => {
                warn!("{e}; using defaults");
                self.unreadable = true;
                self.document = Table::new();
                Settings::default()
            }
        }
    }

    pub fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        if self.unreadable && path.exists() {
            let backup = path.with_extension("toml.bak");
            std::fs::rename(&path, &backup).map_err(|source| SettingsError::Io {
                path: path.clone(),
                source,
            })?;
            warn!(
                path = %path.display(),
                backup = %backup.display(),
                "moved unreadable settings aside"
            );
        }
        self.unreadable = false;

        let mut doc = self.document.clone();
        settings.merge_into(&mut doc)?;
        save_document(&path, &doc)?;
        self.document = doc;
        debug!(path = %path.display(), theme = %settings.theme, "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::ThemePreference;
    use assert_fs::prelude::*;

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let mut store = SettingsStore::ephemeral();
        assert!(store.path().is_none());
        assert!(store.themes_dir().is_none());
        let mut s = store.load();
        s.theme = ThemePreference::Dark;
        store.save(&s).unwrap();
        assert_eq!(store.load().theme, ThemePreference::Light);
    }

    #[test]
    fn garbled_file_loads_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("config.toml");
        f.write_str("[[[").unwrap();
        let mut store = SettingsStore::at(f.path());
        assert_eq!(store.load(), Settings::default());
        assert!(store.is_unreadable());
    }

    #[test]
    fn themes_dir_sits_beside_config() {
        let store = SettingsStore::at("/etc/stockroom/config.toml");
        assert_eq!(store.themes_dir(), Some(PathBuf::from("/etc/stockroom/themes")));
    }

    #[test]
    fn save_then_load_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::at(dir.path().join("config.toml"));
        let mut s = Settings::default();
        s.theme = ThemePreference::Dark;
        store.save(&s).unwrap();
        assert_eq!(store.load(), s);
    }

    #[test]
    fn save_moves_unparseable_file_aside() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("config.toml");
        f.write_str("theme = \"dark\"\n[keybinds\n").unwrap();
        let mut store = SettingsStore::at(f.path());
        let mut s = store.load();
        s.theme = ThemePreference::Dark;
        store.save(&s).unwrap();

        temp.child("config.toml.bak")
            .assert(predicates::str::contains("[keybinds"));
        f.assert(predicates::str::contains("theme = \"dark\""));
        assert!(!store.is_unreadable());
    }

    #[test]
    fn save_keeps_keys_it_does_not_own() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("config.toml");
        f.write_str("theme = \"light\"\nextra = 1\n").unwrap();
        let mut store = SettingsStore::at(f.path());
        let mut s = store.load();
        s.theme = ThemePreference::Dark;
        store.save(&s).unwrap();
        f.assert(predicates::str::contains("extra = 1"));
        temp.child("config.toml.bak").assert(predicates::path::missing());
    }
}
