pub mod config_dirs;
pub mod keybinds;
pub mod persist;
pub mod read_settings;
pub mod runtime_keybinds;
pub mod write_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_log_path, default_settings_path, ensure_dirs_exist};
pub use persist::SettingsStore;
pub use read_settings::load_settings;
pub use write_settings::{save_settings, Settings};
