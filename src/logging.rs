//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with game output on stdout.

use tracing::level_filters::LevelFilter;

/// Level for a `-v` count: warnings by default, then info, debug, trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
///
/// The full-screen TUI owns the terminal, so logging is switched off there.
/// Calling this more than once keeps the first subscriber.
pub fn init(verbosity: u8, tui: bool) {
    let level = if tui { LevelFilter::OFF } else { level_for(verbosity) };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
