//! Stderr logging for the CLI.

use tracing::Level;

/// Map `-v` occurrences to a max level; warnings only by default.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .try_init();
}
