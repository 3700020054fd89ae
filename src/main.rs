use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use stockroom::app::settings::runtime_keybinds::{self, Keybinds};
use stockroom::app::settings::{default_log_path, SettingsStore};
use stockroom::logging::init_logging;
use stockroom::runner::run_app;

/// Terminal inventory manager.
#[derive(Parser, Debug)]
#[command(name = "stockroom", version)]
struct Cli {
    /// Settings file to read and write (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (default: platform cache dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Do not read or write the settings file
    #[arg(long, conflicts_with = "config")]
    no_persist: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = match cli.log_file.clone().or_else(default_log_path) {
        Some(path) => match init_logging(&path) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("warning: logging disabled: {e:#}");
                None
            }
        },
        None => None,
    };

    let mut settings_store = if cli.no_persist {
        SettingsStore::ephemeral()
    } else {
        match cli.config {
            Some(path) => SettingsStore::at(path),
            None => SettingsStore::default_location(),
        }
    };

    let settings = settings_store.load();
    runtime_keybinds::install(Keybinds::with_overrides(&settings.keybinds));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        settings = ?settings_store.path(),
        "starting"
    );
    run_app(settings_store)
}
