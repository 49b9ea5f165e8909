//! Tracing subscriber setup for the `slots` binary.
//!
//! Logs go to stderr so stdout stays clean for piped output. `RUST_LOG`
//! directives are honoured; `--log-level` sets the default for the
//! `slot_engine` and `slots` targets.

use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global subscriber at `level`.
///
/// Uses `try_init`, so a second call (e.g. from tests) is a no-op.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in ["slot_engine", "slots"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        debug!("logging initialized at level: {}", level);
    }
}
