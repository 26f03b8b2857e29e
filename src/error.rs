//! Error types for the bootstrap pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the bootstrap.
///
/// Tolerated step failures (admin creation, dashboard import) never surface
/// here; they are logged and swallowed by the step runner.
#[derive(Debug, Error)]
pub enum EntrypointError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("failed to write {path}: {source}")]
    WriteFile { path: PathBuf, source: std::io::Error },

    #[error("failed to spawn `{command}`: {source}")]
    Spawn { command: String, source: std::io::Error },

    #[error("step `{step}` exited with code {code:?}")]
    StepFailed { step: &'static str, code: Option<i32> },

    #[error("failed to exec `{command}`: {source}")]
    Exec { command: String, source: std::io::Error },
}
