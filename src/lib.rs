//! Superset Add-on Entrypoint Library

pub mod config;
pub mod error;
pub mod init;
pub mod launch;
pub mod observability;
pub mod paths;
pub mod render;
pub mod secrets;

pub use config::schema::Settings;
pub use error::EntrypointError;
pub use paths::Paths;

/// Port gunicorn binds inside the container; ingress proxies to it.
pub const WEBSERVER_PORT: u16 = 8099;

/// Worker processes for the wrapped webserver.
pub const WEBSERVER_WORKERS: u32 = 2;

/// Request timeout for the wrapped webserver, in seconds.
pub const WEBSERVER_TIMEOUT_SECS: u32 = 120;
