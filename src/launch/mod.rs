//! Server hand-off.
//!
//! # Design Decisions
//! - The entrypoint replaces itself with gunicorn (`exec`, no supervising
//!   parent) so shutdown and reload signals reach the process manager
//!   directly
//! - Request-line and header-field limits are lifted: Superset's chart
//!   endpoints legitimately produce very large query strings
//! - The WSGI module is the ingress-aware `ha_wsgi` wrapper shipped in the
//!   image next to the rendered configuration

use std::process::Command;

use tracing::info;

use crate::error::EntrypointError;
use crate::init::runner::CommandSpec;
use crate::paths::Paths;
use crate::{WEBSERVER_PORT, WEBSERVER_TIMEOUT_SECS, WEBSERVER_WORKERS};

/// Build the gunicorn invocation.
pub fn server_command(paths: &Paths) -> CommandSpec {
    CommandSpec::new("gunicorn")
        .arg("--bind")
        .arg(format!("0.0.0.0:{WEBSERVER_PORT}"))
        .arg("--workers")
        .arg(WEBSERVER_WORKERS.to_string())
        .arg("--timeout")
        .arg(WEBSERVER_TIMEOUT_SECS.to_string())
        .arg("--limit-request-line")
        .arg("0")
        .arg("--limit-request-field_size")
        .arg("0")
        .arg("--chdir")
        .arg(paths.config_dir.display().to_string())
        .arg("ha_wsgi:application")
        .env("SUPERSET_CONFIG_PATH", paths.superset_config().display().to_string())
}

/// Replace the current process image with the server.
///
/// Only ever returns on failure; on success the entrypoint is gone and
/// gunicorn owns the process.
pub fn exec_server(paths: &Paths) -> EntrypointError {
    let spec = server_command(paths);
    info!(command = %spec.display(), "handing off to the process manager");

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;

        let source = Command::new(&spec.program)
            .args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k, v)))
            .exec();
        EntrypointError::Exec { command: spec.display(), source }
    }
    #[cfg(not(unix))]
    {
        EntrypointError::Exec {
            command: spec.display(),
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "process replacement requires a unix target",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_command_shape() {
        let paths = Paths::default();
        let spec = server_command(&paths);

        assert_eq!(spec.program, "gunicorn");
        assert_eq!(
            spec.args,
            vec![
                "--bind",
                "0.0.0.0:8099",
                "--workers",
                "2",
                "--timeout",
                "120",
                "--limit-request-line",
                "0",
                "--limit-request-field_size",
                "0",
                "--chdir",
                "/etc/superset",
                "ha_wsgi:application",
            ]
        );
        assert!(spec
            .env
            .contains(&("SUPERSET_CONFIG_PATH".to_string(), "/etc/superset/superset_config.py".to_string())));
    }
}
