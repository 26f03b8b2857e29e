//! SQLAlchemy URI construction for the registered data source.

use tracing::warn;

use crate::config::schema::{DatabaseKind, Settings};

/// Recorder database of a Home Assistant install without an external DB.
pub const HA_SQLITE_URI: &str = "sqlite:////config/home-assistant_v2.db";

/// Map settings to the SQLAlchemy URI of the Home Assistant database.
///
/// Total over all settings values: an unrecognized database kind logs a
/// warning and falls back to the sqlite case rather than failing, keeping
/// the add-on serving over strict validation.
pub fn build_uri(settings: &Settings) -> String {
    match settings.database {
        DatabaseKind::Sqlite => HA_SQLITE_URI.to_string(),
        DatabaseKind::Mysql => format!(
            "mysql+pymysql://{}:{}@{}:{}/{}",
            settings.user, settings.password, settings.host, settings.port, settings.name
        ),
        DatabaseKind::Postgresql => format!(
            "postgresql+psycopg2://{}:{}@{}:{}/{}",
            settings.user, settings.password, settings.host, settings.port, settings.name
        ),
        DatabaseKind::Unknown => {
            warn!("unrecognized database_type; falling back to sqlite");
            HA_SQLITE_URI.to_string()
        }
    }
}
