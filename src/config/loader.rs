//! Option loading from disk.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::schema::{AddonOptions, DatabaseKind, Settings};

/// Load settings from the options document.
///
/// Never fails the process: a missing file yields all-defaults, a malformed
/// document is logged and degrades to all-defaults, and a wrong-typed field
/// degrades to that field's default only.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!(path = %path.display(), "no options file; using defaults");
        return Settings::default();
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "options file unreadable; using defaults");
            return Settings::default();
        }
    };

    let options: AddonOptions = match serde_json::from_str(&raw) {
        Ok(options) => options,
        Err(e) => {
            error!(path = %path.display(), error = %e, "options file is not valid JSON; using defaults");
            return Settings::default();
        }
    };

    settings_from_options(options)
}

/// Coerce the raw document into typed settings, field by field.
pub fn settings_from_options(options: AddonOptions) -> Settings {
    let defaults = Settings::default();
    Settings {
        database: options
            .database_type
            .as_ref()
            .and_then(Value::as_str)
            .map(DatabaseKind::parse)
            .unwrap_or(defaults.database),
        host: string_field("database_host", options.database_host, defaults.host),
        port: port_field(options.database_port, defaults.port),
        name: string_field("database_name", options.database_name, defaults.name),
        user: string_field("database_user", options.database_user, defaults.user),
        password: string_field("database_password", options.database_password, defaults.password),
        secret_key: secret_field("superset_secret_key", options.superset_secret_key),
        admin_password: secret_field("admin_password", options.admin_password),
    }
}

fn string_field(key: &str, value: Option<Value>, default: String) -> String {
    match value {
        None => default,
        Some(Value::String(s)) => s,
        Some(other) => {
            warn!(key, value = %other, "expected a string; using default");
            default
        }
    }
}

/// Empty strings count as unset so the supervisor's blank defaults don't
/// shadow a generated secret.
fn secret_field(key: &str, value: Option<Value>) -> Option<String> {
    match value {
        None => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            warn!(key, value = %other, "expected a string; treating as unset");
            None
        }
    }
}

/// Accepts both a JSON number and a numeric string.
fn port_field(value: Option<Value>, default: u16) -> u16 {
    let parsed = match &value {
        None => return default,
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Some(Value::String(s)) => s.parse::<u16>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(port) => port,
        None => {
            warn!(value = ?value, "database_port is not a valid port; using default");
            default
        }
    }
}
