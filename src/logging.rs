//! Logging init for binaries, tests and benches embedding the scheduler.
//!
//! The library only emits `tracing` events:
//! - `debug`: one summary per allocation pass, cascade start
//! - `trace`: every capacity draw
//! - `warn`: rejected input snapshots
//!
//! Nothing is printed unless a subscriber is installed.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,u_printq=info";

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns an error
/// instead of panicking if a global subscriber is already set.
pub fn init_stderr(default_filter: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish()
        .try_init()
}
