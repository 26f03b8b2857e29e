//! Add-on option handling.
//!
//! # Data Flow
//! ```text
//! /data/options.json
//!     → loader.rs (read & tolerant per-field extraction)
//!     → Settings (typed, immutable)
//!     → uri.rs (pure Settings → SQLAlchemy URI mapping)
//! ```
//!
//! # Design Decisions
//! - A missing options file is normal: every field has an explicit default
//! - A malformed field degrades to that field's default, never to an abort
//! - Settings is loaded once and passed by reference; no ambient state

pub mod loader;
pub mod schema;
pub mod uri;

pub use loader::load_settings;
pub use schema::{DatabaseKind, Settings};
pub use uri::build_uri;
