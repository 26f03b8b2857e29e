//! File-backed secret lifecycle.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng, RngCore};
use tracing::debug;

use crate::error::EntrypointError;

/// Where a provisioned secret value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Supplied explicitly through the options file.
    Explicit,
    /// Read back from the persisted file.
    Persisted,
    /// Generated this run and persisted for the next one.
    Generated,
}

/// A provisioned secret and how it was obtained.
#[derive(Debug, Clone)]
pub struct Secret {
    pub value: String,
    pub source: SecretSource,
}

/// Resolve a named secret against its backing file.
pub fn ensure(
    label: &str,
    explicit: Option<&str>,
    path: &Path,
    generate: impl FnOnce() -> String,
) -> Result<Secret, EntrypointError> {
    if let Some(value) = explicit {
        debug!(label, path = %path.display(), "using explicit value from options");
        write_secret_file(path, value)?;
        return Ok(Secret { value: value.to_string(), source: SecretSource::Explicit });
    }

    if path.exists() {
        let raw = fs::read_to_string(path).map_err(|source| EntrypointError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(label, path = %path.display(), "reusing persisted value");
        return Ok(Secret { value: raw.trim_end().to_string(), source: SecretSource::Persisted });
    }

    let value = generate();
    write_secret_file(path, &value)?;
    debug!(label, path = %path.display(), "generated and persisted new value");
    Ok(Secret { value, source: SecretSource::Generated })
}

/// Flask signing secret: 42 random bytes, base64-encoded.
pub fn generate_secret_key() -> String {
    let mut bytes = [0u8; 42];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

/// Admin password: 20 alphanumeric characters (~119 bits of entropy).
pub fn generate_admin_password() -> String {
    OsRng.sample_iter(&Alphanumeric).take(20).map(char::from).collect()
}

fn write_secret_file(path: &Path, value: &str) -> Result<(), EntrypointError> {
    let wrap = |source| EntrypointError::WriteFile { path: path.to_path_buf(), source };
    fs::write(path, format!("{value}\n")).map_err(wrap)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(wrap)?;
    }
    Ok(())
}
