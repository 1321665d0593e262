pub mod builders;
pub mod fake_runner;
pub mod recording_sink;

use std::sync::Once;

use runseq::logging::LOG_ENV;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests, once per test binary.
///
/// Output goes through `with_test_writer()`, so the harness only shows it
/// for failing tests (or with `-- --nocapture`). The filter comes from
/// `RUNSEQ_LOG`, then `RUST_LOG`, then defaults to `info`:
/// `RUNSEQ_LOG=runseq::batch=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
