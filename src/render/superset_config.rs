//! `superset_config.py` template.

use crate::{WEBSERVER_PORT, WEBSERVER_TIMEOUT_SECS, WEBSERVER_WORKERS};

/// Render the Superset configuration module.
///
/// The posture assumes Home Assistant ingress in front of the server: CSRF
/// and Talisman are off, CORS is open and the public role mirrors Gamma.
/// Heavyweight optional features stay disabled so the add-on runs without a
/// task queue or external cache.
pub fn render_superset_config(secret_key: &str, metadata_uri: &str) -> String {
    format!(
        r#"# Rendered by the add-on entrypoint on every start; edits are overwritten.

SECRET_KEY = "{secret_key}"
SQLALCHEMY_DATABASE_URI = "{metadata_uri}"

SUPERSET_WEBSERVER_PORT = {port}
SUPERSET_WEBSERVER_TIMEOUT = {timeout}
SUPERSET_WORKERS = {workers}

# Authentication and TLS are the ingress gateway's job.
WTF_CSRF_ENABLED = False
TALISMAN_ENABLED = False
ENABLE_PROXY_FIX = True
PUBLIC_ROLE_LIKE = "Gamma"
ENABLE_CORS = True
CORS_OPTIONS = {{"supports_credentials": True, "origins": ["*"]}}

FEATURE_FLAGS = {{
    "ALERT_REPORTS": False,
    "THUMBNAILS": False,
    "SCHEDULED_QUERIES": False,
    "ENABLE_TEMPLATE_PROCESSING": True,
}}

CACHE_CONFIG = {{"CACHE_TYPE": "SimpleCache"}}
DATA_CACHE_CONFIG = {{"CACHE_TYPE": "SimpleCache"}}
FILTER_STATE_CACHE_CONFIG = {{"CACHE_TYPE": "SimpleCache"}}
EXPLORE_FORM_DATA_CACHE_CONFIG = {{"CACHE_TYPE": "SimpleCache"}}

# No broker is configured; background task execution stays off.
CELERY_CONFIG = None
"#,
        secret_key = py_escape(secret_key),
        metadata_uri = py_escape(metadata_uri),
        port = WEBSERVER_PORT,
        timeout = WEBSERVER_TIMEOUT_SECS,
        workers = WEBSERVER_WORKERS,
    )
}

/// Escape a value for embedding in a double-quoted Python string literal.
pub(crate) fn py_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
