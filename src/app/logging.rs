use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::DEBUG_LOG_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// Used while the terminal UI owns the screen.
    DebugFile,
}

/// `RUST_LOG` wins over the defaults picked here.
pub fn init_logging(verbose: bool, sink: LogSink) {
    let default_level = match (sink, verbose) {
        (LogSink::Stderr, false) => "warn",
        (LogSink::Stderr, true) => "info",
        (LogSink::DebugFile, false) => "info",
        (LogSink::DebugFile, true) => "debug",
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} {}: {}",
            Local::now().format("%H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if sink == LogSink::DebugFile {
        match debug_log_target(Path::new(DEBUG_LOG_PATH)) {
            Some(target) => {
                builder.target(target);
            }
            None => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    let _ = builder.try_init();
}

/// Must run before the terminal UI takes over the screen, since a failure is
/// reported on stderr.
fn debug_log_target(path: &Path) -> Option<Target> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(Target::Pipe(Box::new(file))),
        Err(e) => {
            eprintln!(
                "cannot open debug log {}: {}; logging disabled",
                path.display(),
                e
            );
            None
        }
    }
}
