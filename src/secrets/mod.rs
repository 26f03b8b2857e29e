//! Secret provisioning.
//!
//! # Data Flow
//! ```text
//! options override ──┐
//!                    ▼
//! ensure(label, override, path, generator)
//!     override present → persist it (overwriting) → return
//!     file exists      → read back verbatim       → return
//!     otherwise        → generate → persist 0600  → return
//! ```
//!
//! # Design Decisions
//! - Generated values are stable across restarts: files on /data win over
//!   regeneration, an explicit option wins over both
//! - Secret files are owner read/write only
//! - A freshly generated admin password is surfaced once at warn level;
//!   afterwards it is only recoverable from the persisted file

pub mod provision;

pub use provision::{ensure, generate_admin_password, generate_secret_key, Secret, SecretSource};
