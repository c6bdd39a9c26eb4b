//! File logging for the terminal runner.
//!
//! The game owns the terminal in raw mode, so log records go to a file.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Install a log4rs file logger at `level`.
///
/// `LevelFilter::Off` installs nothing, so no file is created.
pub fn init_log(level: LevelFilter, file_path: impl AsRef<Path>) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let file_path = file_path.as_ref();
    if let Some(dir) = file_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(file_path)
        .with_context(|| format!("opening log file {}", file_path.display()))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Parse a `--log-level` value.
pub fn parse_level(s: &str) -> Option<LevelFilter> {
    s.parse().ok()
}
