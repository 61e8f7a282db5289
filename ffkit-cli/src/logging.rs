// ffkit-cli/src/logging.rs
//
// Console logging setup. The application uses env_logger behind the `log`
// facade; RUST_LOG=debug surfaces the per-run ffmpeg progress lines.

use env_logger::Env;

/// Initializes the logger with an `info` default filter.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
