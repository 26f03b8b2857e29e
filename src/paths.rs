//! Filesystem locations used by the bootstrap.
//!
//! # Design Decisions
//! - Every fixed container path lives here, never inline in the pipeline
//! - All locations are overridable (CLI flags) so tests can redirect the
//!   whole filesystem surface into a temp directory
//! - Derived locations (secret files, sentinels, artifacts) are methods on
//!   [`Paths`] so path construction stays in one place

use std::path::PathBuf;

/// Add-on options document written by the supervisor.
pub const OPTIONS_FILE: &str = "/data/options.json";

/// Persistent storage volume; survives container restarts.
pub const DATA_DIR: &str = "/data";

/// Directory the rendered Superset configuration is written to.
pub const CONFIG_DIR: &str = "/etc/superset";

/// Dashboard bundle shipped with the image, if any.
pub const DASHBOARDS_ARCHIVE: &str = "/usr/share/superset/dashboards.zip";

/// Resolved filesystem surface for one bootstrap run.
#[derive(Debug, Clone)]
pub struct Paths {
    pub options_file: PathBuf,
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
    pub dashboards_archive: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            options_file: OPTIONS_FILE.into(),
            data_dir: DATA_DIR.into(),
            config_dir: CONFIG_DIR.into(),
            dashboards_archive: DASHBOARDS_ARCHIVE.into(),
        }
    }
}

impl Paths {
    /// Persisted Flask signing secret.
    pub fn secret_key_file(&self) -> PathBuf {
        self.data_dir.join("secret_key")
    }

    /// Persisted admin account password.
    pub fn admin_password_file(&self) -> PathBuf {
        self.data_dir.join("admin_password")
    }

    /// Sentinel marking first-run setup as complete.
    pub fn init_done_flag(&self) -> PathBuf {
        self.data_dir.join(".init_done")
    }

    /// Sentinel marking the bundled dashboards as imported.
    pub fn dashboards_imported_flag(&self) -> PathBuf {
        self.data_dir.join(".dashboards_imported")
    }

    /// Rendered Superset configuration module.
    pub fn superset_config(&self) -> PathBuf {
        self.config_dir.join("superset_config.py")
    }

    /// Rendered database-registration helper script.
    pub fn register_helper(&self) -> PathBuf {
        self.config_dir.join("register_database.py")
    }

    /// SQLAlchemy URI for Superset's own metadata store.
    ///
    /// Always a local sqlite file on the persistent volume, independent of
    /// whatever external database gets registered as a data source.
    pub fn metadata_db_uri(&self) -> String {
        format!("sqlite:///{}", self.data_dir.join("superset.db").display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let paths = Paths::default();
        assert_eq!(paths.secret_key_file(), PathBuf::from("/data/secret_key"));
        assert_eq!(paths.init_done_flag(), PathBuf::from("/data/.init_done"));
        assert_eq!(
            paths.superset_config(),
            PathBuf::from("/etc/superset/superset_config.py")
        );
    }

    #[test]
    fn test_metadata_uri_is_local_sqlite() {
        let paths = Paths::default();
        assert_eq!(paths.metadata_db_uri(), "sqlite:////data/superset.db");
    }
}
