//! Logging setup for executables.

use std::io;

use tracing::{debug, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs a subscriber that writes to stderr, so log lines never get mixed into frames drawn
/// on stdout.
///
/// `level` is the default verbosity. `RUST_LOG` takes precedence when set, e.g.
/// `RUST_LOG=bstviz::tree=trace`.
pub fn init(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Someone beat us to it, their subscriber wins.
        return;
    }
    debug!(%level, "initialized tracing log");
}
