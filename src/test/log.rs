//! Logging for unit tests.

use std::sync::Once;

/// Installs a stderr subscriber the first time it's called. Filtered by `RUST_LOG`.
pub(crate) fn init() {
    static INITIALIZED: Once = Once::new();
    INITIALIZED.call_once(|| {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_line_number(true)
            .with_level(true)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .without_time()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
