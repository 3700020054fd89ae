use directories_next::ProjectDirs;
use std::io;
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "stockroom";
const APPLICATION: &str = "stockroom";

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "config.toml";
/// Directory (beside the settings file) holding custom palettes.
pub const THEMES_DIR: &str = "themes";
/// Log file name inside the cache directory.
pub const LOG_FILE: &str = "stockroom.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Per-user configuration directory, if the platform provides one.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory used for the log file.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Default location of `config.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}

/// Default location of the log file.
pub fn default_log_path() -> Option<PathBuf> {
    user_cache_dir().map(|d| d.join(LOG_FILE))
}

/// Create each directory in `dirs` (and parents) if missing.
pub fn ensure_dirs_exist<P: AsRef<Path>>(dirs: &[P]) -> io::Result<()> {
    for d in dirs {
        std::fs::create_dir_all(d)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dirs_creates_nested_paths() {
        let temp = assert_fs::TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        ensure_dirs_exist(&[&nested]).unwrap();
        assert!(nested.is_dir());
        // idempotent
        ensure_dirs_exist(&[&nested]).unwrap();
    }

    #[test]
    fn default_paths_use_expected_file_names() {
        if let Some(p) = default_settings_path() {
            assert!(p.ends_with(SETTINGS_FILE));
        }
        if let Some(p) = default_log_path() {
            assert!(p.ends_with(LOG_FILE));
        }
    }
}
