//! Superset Add-on Entrypoint
//!
//! Bootstraps and launches Superset inside the Home Assistant add-on
//! container.
//!
//! # Pipeline Overview
//!
//! ```text
//!  /data/options.json ──▶ ┌─────────┐   ┌──────────┐   ┌──────────┐
//!                         │ config  │──▶│ secrets  │──▶│  render  │──▶ superset_config.py
//!                         │ loader  │   │provision │   │          │    register_database.py
//!                         └────┬────┘   └──────────┘   └──────────┘
//!                              │ Settings
//!                              ▼
//!                         ┌─────────┐   ┌──────────┐
//!                         │  init   │──▶│  launch  │──▶ exec gunicorn
//!                         │ (steps) │   │  (exec)  │
//!                         └─────────┘   └──────────┘
//! ```
//!
//! Strictly sequential: every child invocation blocks, and the process
//! image is replaced at the end. Fatal failures (directory setup, schema
//! migration, exec) abort with a non-zero exit; tolerated failures (admin
//! creation races, dashboard import) are logged and skipped.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use superset_entrypoint::secrets::SecretSource;
use superset_entrypoint::{config, init, launch, observability, paths, render, secrets};
use superset_entrypoint::{EntrypointError, Paths};

#[derive(Parser)]
#[command(name = "superset-entrypoint")]
#[command(about = "Bootstraps and launches Superset for the Home Assistant add-on", long_about = None)]
struct Cli {
    /// Add-on options document.
    #[arg(long, default_value = paths::OPTIONS_FILE)]
    options: PathBuf,

    /// Persistent storage directory.
    #[arg(long, default_value = paths::DATA_DIR)]
    data_dir: PathBuf,

    /// Directory the rendered configuration is written to.
    #[arg(long, default_value = paths::CONFIG_DIR)]
    config_dir: PathBuf,

    /// Bundled dashboard archive.
    #[arg(long, default_value = paths::DASHBOARDS_ARCHIVE)]
    dashboards: PathBuf,
}

impl Cli {
    fn into_paths(self) -> Paths {
        Paths {
            options_file: self.options,
            data_dir: self.data_dir,
            config_dir: self.config_dir,
            dashboards_archive: self.dashboards,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paths = Cli::parse().into_paths();

    observability::logging::init();
    info!("superset-entrypoint v0.1.0 starting");

    for dir in [&paths.data_dir, &paths.config_dir] {
        fs::create_dir_all(dir)
            .map_err(|source| EntrypointError::CreateDir { path: dir.clone(), source })?;
    }

    let settings = config::load_settings(&paths.options_file);
    info!(
        database = settings.database.as_str(),
        host = %settings.host,
        port = settings.port,
        name = %settings.name,
        "Options loaded"
    );

    let secret_key = secrets::ensure(
        "secret key",
        settings.secret_key.as_deref(),
        &paths.secret_key_file(),
        secrets::generate_secret_key,
    )?;

    let admin_password = secrets::ensure(
        "admin password",
        settings.admin_password.as_deref(),
        &paths.admin_password_file(),
        secrets::generate_admin_password,
    )?;
    if admin_password.source == SecretSource::Generated {
        // One-time display; afterwards the password only lives in the file.
        warn!(
            username = init::superset::ADMIN_USERNAME,
            password = %admin_password.value,
            "Generated a new admin password; note it down or change it after login"
        );
    }

    let datasource_uri = config::build_uri(&settings);
    render::write_artifacts(&paths, &secret_key.value, &datasource_uri)?;

    init::run_initializer(&init::SystemRunner, &paths, &admin_password.value)?;

    // Only returns on failure; on success gunicorn owns the process.
    Err(launch::exec_server(&paths).into())
}
