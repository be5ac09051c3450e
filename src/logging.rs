//! Debug logging
//!
//! The TUI owns the terminal, so log records go to `<cache_dir>/tripq/tripq.log`.
//! Logging is on in debug builds and when `--debug` is passed; `RUST_LOG`
//! overrides the default filter.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const DEFAULT_FILTER: &str = "tripq=debug";

/// Log file location, if the platform has a cache directory
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("tripq").join("tripq.log"))
}

/// Initialize file logging. Returns the log path when logging was enabled.
pub fn init(debug: bool) -> Option<PathBuf> {
    if !debug && !cfg!(debug_assertions) {
        return None;
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .ok()?;

    log::info!("tripq {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Some(path)
}
