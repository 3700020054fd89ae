use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Short, single-line rendering suitable for the footer status line.
pub fn render_settings_error(err: &SettingsError) -> String {
    match err {
        SettingsError::Io { path, source } => {
            format!("Preferences file {} unavailable: {}", path.display(), source)
        }
        SettingsError::Parse { path, .. } => {
            format!("Ignoring malformed settings in {}", path.display())
        }
        SettingsError::Encode(e) => format!("Could not encode preferences: {}", e),
    }
}
