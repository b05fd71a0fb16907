//! Process-wide diagnostic logging.
//!
//! Lines go to exactly one sink, chosen once at startup: either the
//! hosting runtime's logging function, or a file at
//! `~/.config/bordercolor/logs/bordercolor.log` rotated by size to
//! `bordercolor.log.1` (one backup kept). Logging never fails the
//! caller; with no sink installed, lines are dropped.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "bordercolor.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

impl LogConfig {
    /// Rotation threshold in bytes. Absurd sizes saturate instead of
    /// wrapping.
    pub fn max_bytes(&self) -> u64 {
        self.max_file_mb.saturating_mul(1024 * 1024)
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name. Unknown names mean `Info`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

/// A logging function supplied by the hosting runtime.
pub type HostSink = Box<dyn Fn(Level, &str) + Send + Sync>;

enum Sink {
    File(FileLog),
    Host(HostSink),
}

struct FileLog {
    file: File,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
}

struct Logger {
    sink: Sink,
    min_level: Level,
}

/// Initialises the global file logger.
///
/// Does nothing if `config.enabled` is `false` or a sink is already set.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    let path = log_dir.join(LOG_FILE_NAME);

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    let sink = Sink::File(FileLog {
        file,
        path,
        max_bytes: config.max_bytes(),
        written,
    });

    let _ = LOGGER.set(Mutex::new(Logger {
        sink,
        min_level: Level::parse(&config.level),
    }));
}

/// Routes all log lines to the host's logging function.
///
/// Does nothing if a sink is already set.
pub fn init_host(min_level: Level, sink: HostSink) {
    let _ = LOGGER.set(Mutex::new(Logger {
        sink: Sink::Host(sink),
        min_level,
    }));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    match &mut logger.sink {
        Sink::Host(sink) => sink(level, &args.to_string()),
        Sink::File(file) => file.write_line(level, args),
    }
}

impl FileLog {
    fn write_line(&mut self, level: Level, args: fmt::Arguments<'_>) {
        let line = format!("{} [{}] {args}\n", timestamp(), level.as_str());
        let _ = self.file.write_all(line.as_bytes());
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        let backup = self.path.with_extension(format!(
            "{}{}",
            LOG_FILE_NAME.rsplit('.').next().unwrap_or("log"),
            BACKUP_SUFFIX
        ));
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

fn timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Warn"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
    }

    #[test]
    fn unknown_level_means_info() {
        assert_eq!(Level::parse("verbose"), Level::Info);
        assert_eq!(Level::parse(""), Level::Info);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn rotation_threshold_is_in_megabytes() {
        // Arrange
        let config = LogConfig::default();

        // Act / Assert
        assert_eq!(config.max_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn huge_rotation_threshold_saturates() {
        // Arrange
        let config = LogConfig {
            enabled: true,
            level: "debug".into(),
            max_file_mb: u64::MAX / 1024,
        };

        // Act
        let max_bytes = config.max_bytes();

        // Assert
        assert_eq!(max_bytes, u64::MAX);
    }

    #[test]
    fn huge_rotation_threshold_parses_from_toml() {
        // Arrange
        let text = "max_file_mb = 18014398509481983";

        // Act
        let config: LogConfig = toml::from_str(text).unwrap();

        // Assert
        assert_eq!(config.max_bytes(), u64::MAX);
    }

    #[test]
    fn logging_without_sink_is_dropped() {
        // Act / Assert: must not panic.
        crate::log_error!("no sink installed: {}", 1);
    }
}
