// Logger setup for host applications.
//
// The library itself only emits through the `log` facade; embedders that
// already install their own logger (e.g. a platform-specific one on mobile)
// should skip this and the facade routes to theirs.
use anyhow::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Installs a terminal logger at the given level. Call at most once per
/// process.
pub fn init(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}
