//! Logger setup for the binaries
//!
//! Both binaries log through the `log` facade to stderr; stdout is
//! reserved for the command-line tool's document output. `RUST_LOG`
//! overrides the default level.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Pick the default level from the verbosity flag
pub fn default_level(verbose: bool, quiet_default: LevelFilter) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        quiet_default
    }
}

/// Initialize the global logger
///
/// # Arguments
/// * `level` - Level used when `RUST_LOG` is unset
pub fn init_logger(level: LevelFilter) {
    let env = Env::default().default_filter_or(level.as_str());
    let result = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();

    if result.is_err() {
        // Only happens if something else installed a logger first
        eprintln!("Warning: Global logger was already initialized");
    }
}
