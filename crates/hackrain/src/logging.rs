//! Log file setup.
//!
//! The terminal belongs to the animation, so logs go to a file in the data
//! directory. Failing to open it disables logging rather than the app.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use hackrain_config::Config;
use tracing::Level;

/// Install the global subscriber. Returns `false` if logging stays off.
pub fn init(config: &Config) -> bool {
    let Some(path) = hackrain_config::log_path() else {
        return false;
    };
    let Ok(file) = open_log_file(&path) else {
        return false;
    };
    let level = config.level().unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok()
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
