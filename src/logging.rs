//! Log backend for the `log` facade
//!
//! Records are numbered with a process-wide sequence counter and written
//! either to stderr or to a log file. The file handle lives in a global so
//! that [`flush`] can reach it at shutdown.

use crate::config::LogTarget;
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Sequence counter shared by every record
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Open log file, if logging to a file
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Render one record as a single line.
pub fn format_record(seq: u64, record: &Record) -> String {
    format!(
        "[{:06}] {:<5} {}: {}",
        seq,
        record.level(),
        record.target(),
        record.args()
    )
}

struct PipelineLogger {
    to_file: bool,
}

impl Log for PipelineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(next_seq(), record);

        if self.to_file {
            if let Ok(mut guard) = LOG_FILE.lock() {
                if let Some(file) = guard.as_mut() {
                    let _ = writeln!(file, "{}", line);
                }
            }
        } else {
            let _ = writeln!(io::stderr(), "{}", line);
        }
    }

    fn flush(&self) {
        flush();
    }
}

/// Install the global logger. Call once at startup.
pub fn init(target: &LogTarget, level: LevelFilter) -> io::Result<()> {
    let to_file = match target {
        LogTarget::Disabled => {
            log::set_max_level(LevelFilter::Off);
            return Ok(());
        }
        LogTarget::Stderr => false,
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(file);
            }
            true
        }
    };

    log::set_boxed_logger(Box::new(PipelineLogger { to_file }))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

/// Flush the log file, if one is open.
pub fn flush() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = file.flush();
        }
    }
}
