//! One-time initialization.
//!
//! # Data Flow
//! ```text
//! every start:            .init_done unset:            .dashboards_imported
//!                                                      unset AND bundle present:
//!   superset db upgrade     superset fab create-admin
//!   (fatal)                 python3 register_database.py   superset import-dashboards
//!                           superset init                  touch .dashboards_imported
//!                           touch .init_done
//! ```
//!
//! # Design Decisions
//! - Steps are typed values with a `fatal` flag, executed by one runner
//!   that stops on the first fatal failure and logs past tolerated ones
//! - Schema migration runs on every start, outside the sentinel, so version
//!   upgrades are picked up; migrations are no-ops when already current
//! - Role sync (`superset init`) runs strictly after the data-source
//!   registration it depends on
//! - Child invocations go through the [`runner::CommandRunner`] seam so
//!   tests can assert invocation counts without a Superset install

pub mod runner;
pub mod sentinel;
pub mod steps;
pub mod superset;

pub use runner::{CommandOutcome, CommandRunner, CommandSpec, SystemRunner};
pub use sentinel::Sentinel;
pub use steps::{run_steps, Step};
pub use superset::run_initializer;
