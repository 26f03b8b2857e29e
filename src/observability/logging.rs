//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Log level comes from `RUST_LOG` when set, defaulting to info for this
/// crate. Output is plain text: the supervisor timestamps and captures the
/// add-on log stream.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "superset_entrypoint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
