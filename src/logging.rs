//! Size-capped debug and crash logs in the temp directory.
//!
//! The interactive view owns the terminal, so diagnostics go to files instead
//! of stderr. Everything is off unless `--logs` is given.

use crate::config::AppConfig;
use std::{
    env, fs,
    io::Write,
    panic,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, OnceLock,
    },
    time::{SystemTime, UNIX_EPOCH},
};

const LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
const CRASH_LOG_MAX_BYTES: u64 = 256 * 1024;
static LOG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_CONTENT_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_FILE: OnceLock<Mutex<Option<CappedFile>>> = OnceLock::new();

/// Path to the debug log file.
pub fn log_file_path() -> PathBuf {
    env::temp_dir().join("gesturehud.log")
}

/// Path to the crash log file (metadata only unless content logging is on).
pub fn crash_log_path() -> PathBuf {
    env::temp_dir().join("gesturehud_crash.log")
}

/// Append-only file that starts over once it would exceed `max_bytes`.
struct CappedFile {
    path: PathBuf,
    file: fs::File,
    max_bytes: u64,
    len: u64,
}

impl CappedFile {
    fn open(path: PathBuf, max_bytes: u64) -> Option<Self> {
        let existing = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let (file, len) = if existing > max_bytes {
            (truncate(&path).ok()?, 0)
        } else {
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()?;
            (file, existing)
        };
        Some(Self {
            path,
            file,
            max_bytes,
            len,
        })
    }

    fn append(&mut self, line: &str) {
        let next = line.len() as u64;
        if self.len.saturating_add(next) > self.max_bytes {
            match truncate(&self.path) {
                Ok(file) => {
                    self.file = file;
                    self.len = 0;
                }
                Err(_) => return,
            }
        }
        if self.file.write_all(line.as_bytes()).is_ok() {
            self.len = self.len.saturating_add(next);
        }
    }
}

fn truncate(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn log_file() -> &'static Mutex<Option<CappedFile>> {
    LOG_FILE.get_or_init(|| Mutex::new(None))
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn set_logging(enabled: bool, content_enabled: bool) {
    LOG_ENABLED.store(enabled, Ordering::Relaxed);
    LOG_CONTENT_ENABLED.store(enabled && content_enabled, Ordering::Relaxed);
    let mut file = log_file()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *file = if enabled {
        CappedFile::open(log_file_path(), LOG_MAX_BYTES)
    } else {
        None
    };
}

/// Configure file logging and structured tracing from CLI flags or environment.
pub fn init_logging(config: &AppConfig) {
    let enabled = config.logs && !config.no_logs;
    set_logging(enabled, config.log_content);
    if enabled {
        crate::telemetry::init_tracing();
    }
}

/// Write a timestamped debug line.
pub fn log_debug(msg: &str) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let line = format!("[{}] {msg}\n", unix_seconds());
    let mut file = log_file()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(file) = file.as_mut() {
        file.append(&line);
    }
}

/// Write a debug line that includes user-facing text (labels, panic payloads).
pub fn log_debug_content(msg: &str) {
    if !LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    log_debug(msg);
}

/// Write a minimal crash log entry, omitting the payload unless content logging is on.
pub fn log_panic(info: &panic::PanicHookInfo<'_>) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let location = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_else(|| "unknown".to_string());
    let payload = if LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        info.payload()
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string())
    } else {
        "panic payload omitted (log-content disabled)".to_string()
    };
    let line = format!(
        "[{}] panic at {location}: {payload} (v{})\n",
        unix_seconds(),
        env!("CARGO_PKG_VERSION")
    );
    if let Some(mut file) = CappedFile::open(crash_log_path(), CRASH_LOG_MAX_BYTES) {
        file.append(&line);
    }
}

#[cfg(test)]
pub(crate) fn set_logging_for_tests(enabled: bool, content_enabled: bool) {
    set_logging(enabled, content_enabled);
}
