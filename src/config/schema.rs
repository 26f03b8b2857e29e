//! Option schema definitions.

use serde::Deserialize;
use serde_json::Value;

/// Database backing the Home Assistant recorder.
///
/// Selects which SQLAlchemy driver the registered data source uses. An
/// unrecognized value is kept as [`DatabaseKind::Unknown`] so the URI
/// builder can log the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatabaseKind {
    #[default]
    Sqlite,
    Mysql,
    Postgresql,
    Unknown,
}

impl DatabaseKind {
    /// Total parse: anything unrecognized maps to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "sqlite" => Self::Sqlite,
            "mysql" => Self::Mysql,
            "postgresql" => Self::Postgresql,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
            Self::Unknown => "unknown",
        }
    }
}

/// Raw options document, one optional JSON value per recognized key.
///
/// Kept loose on purpose: field coercion (with per-field defaults for
/// wrong-typed values) happens in the loader, so a single bad field never
/// poisons the rest of the document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddonOptions {
    pub database_type: Option<Value>,
    pub database_host: Option<Value>,
    pub database_port: Option<Value>,
    pub database_name: Option<Value>,
    pub database_user: Option<Value>,
    pub database_password: Option<Value>,
    pub superset_secret_key: Option<Value>,
    pub admin_password: Option<Value>,
}

/// Validated settings for one bootstrap run. Immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseKind,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Explicit signing secret from the options file, if any.
    pub secret_key: Option<String>,
    /// Explicit admin password from the options file, if any.
    pub admin_password: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseKind::Sqlite,
            host: String::new(),
            port: 3306,
            name: "homeassistant".to_string(),
            user: String::new(),
            password: String::new(),
            secret_key: None,
            admin_password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_kind_parse() {
        assert_eq!(DatabaseKind::parse("sqlite"), DatabaseKind::Sqlite);
        assert_eq!(DatabaseKind::parse("mysql"), DatabaseKind::Mysql);
        assert_eq!(DatabaseKind::parse("postgresql"), DatabaseKind::Postgresql);
        assert_eq!(DatabaseKind::parse("mariadb"), DatabaseKind::Unknown);
        assert_eq!(DatabaseKind::parse(""), DatabaseKind::Unknown);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.database, DatabaseKind::Sqlite);
        assert_eq!(settings.port, 3306);
        assert_eq!(settings.name, "homeassistant");
        assert!(settings.host.is_empty());
        assert!(settings.secret_key.is_none());
        assert!(settings.admin_password.is_none());
    }
}
