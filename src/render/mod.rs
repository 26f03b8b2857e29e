//! Configuration artifact rendering.
//!
//! # Responsibilities
//! - Render `superset_config.py` from the provisioned secret and fixed
//!   server constants
//! - Render the database-registration helper script with the data-source
//!   URI embedded
//! - Write both artifacts on every startup, unconditionally, so option
//!   changes take effect without re-running one-time init
//!
//! # Design Decisions
//! - Rendering is pure (string in, string out); writing is a thin wrapper
//! - Both artifacts carry credentials, so they are written owner-only
//! - The ingress-aware WSGI wrapper (`ha_wsgi.py`) ships with the image and
//!   is never touched here

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::EntrypointError;
use crate::paths::Paths;

pub mod register_helper;
pub mod superset_config;

pub use register_helper::render_register_helper;
pub use superset_config::render_superset_config;

/// Write both rendered artifacts into the config directory.
pub fn write_artifacts(
    paths: &Paths,
    secret_key: &str,
    datasource_uri: &str,
) -> Result<(), EntrypointError> {
    let config = render_superset_config(secret_key, &paths.metadata_db_uri());
    write_artifact(&paths.superset_config(), &config)?;

    let helper = render_register_helper(datasource_uri);
    write_artifact(&paths.register_helper(), &helper)?;

    info!(config = %paths.superset_config().display(), "configuration rendered");
    Ok(())
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), EntrypointError> {
    let wrap = |source| EntrypointError::WriteFile { path: path.to_path_buf(), source };
    fs::write(path, contents).map_err(wrap)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(wrap)?;
    }
    Ok(())
}
