//! Logging setup for the keymatch binary
//!
//! The console gets `RUST_LOG` if set, otherwise the level the CLI asks for
//! (`warn`, or `debug` with `--verbose`). Useful filters:
//! - `RUST_LOG=keymatch::accelerator=trace` - every parse and match decision
//! - `RUST_LOG=keymatch::shortcuts=debug` - dispatch failures on the bus
//!
//! Console output goes to stderr so `keymatch parse --json` stays pipeable.
//! A debug-level copy rotates daily under [`crate::config_paths::logs_dir`].

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "keymatch.log";

/// Install the console and file layers
///
/// `default_level` applies to the console when RUST_LOG is unset.
pub fn init(default_level: &str) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // Without a writable logs dir the CLI still works, console only
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
