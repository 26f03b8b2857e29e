//! Observability for the bootstrap itself.
//!
//! The wrapped application has its own logging; this only covers the
//! entrypoint's structured log output, which lands in the add-on log.

pub mod logging;
