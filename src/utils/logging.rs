//! File-backed logging.
//!
//! The game owns the terminal's alternate screen, so log output never goes
//! to stdout/stderr. When a log file is requested, `env_logger` appends to
//! it; `RUST_LOG` controls the filter and defaults to `info`.

use env_logger::{Env, Target, WriteStyle};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
