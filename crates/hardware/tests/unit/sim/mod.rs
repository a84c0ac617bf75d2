/// Reading program images from disk.
pub mod loader;

/// JSON configuration parsing.
pub mod config;

/// The run loop: summaries, watchdog, halt and statistics.
pub mod driver;
