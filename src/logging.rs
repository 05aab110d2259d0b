use std::{fs, fs::OpenOptions, path::Path};

use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use simplelog::WriteLogger;

/// Routes the `log` macros to `path`. The terminal belongs to the UI, so
/// nothing is logged to stdout or stderr.
pub fn init_logger(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    WriteLogger::init(level, simplelog::Config::default(), log_file)
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))
}
