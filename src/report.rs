//! Failure reporting. The engine never decides how logs are written: it talks to whatever logger the
//! application installed behind the [`log`] facade, and only on failure paths. Each line names the
//! component and function it came from, as `<message> [<component> > <function>()]`.
//!
//! How much gets through is controlled by the process-wide [`LogMode`]: `Quiet` drops everything,
//! `Normal` passes errors and warnings, and `Debug` adds informational lines about which default was
//! substituted.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::Level;

/// How chatty the engine is on failure paths.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Emit nothing.
    Quiet,
    /// Emit errors and warnings.
    Normal,
    /// Emit errors, warnings and info.
    Debug,
}

impl Default for LogMode {
    fn default() -> LogMode {
        LogMode::Normal
    }
}

impl LogMode {
    fn to_usize(self) -> usize {
        match self {
            LogMode::Quiet => 0,
            LogMode::Normal => 1,
            LogMode::Debug => 2,
        }
    }

    fn from_usize(val: usize) -> LogMode {
        match val {
            0 => LogMode::Quiet,
            2 => LogMode::Debug,
            _ => LogMode::Normal,
        }
    }

    /// Whether a message at `level` gets through in this mode.
    pub fn allows(self, level: Level) -> bool {
        match self {
            LogMode::Quiet => false,
            LogMode::Normal => level <= Level::Warn,
            LogMode::Debug => level <= Level::Info,
        }
    }
}

static LOG_MODE: AtomicUsize = AtomicUsize::new(1);

/// Sets the process-wide log mode.
pub fn set_log_mode(mode: LogMode) {
    LOG_MODE.store(mode.to_usize(), Ordering::Relaxed);
}

/// The current process-wide log mode.
pub fn log_mode() -> LogMode {
    LogMode::from_usize(LOG_MODE.load(Ordering::Relaxed))
}

/// Formats a report line.
pub fn format_line(message: &str, component: &str, function: &str) -> String {
    format!("{} [{} > {}()]", message, component, function)
}

fn emit(level: Level, message: &str, component: &str, function: &str) {
    if log_mode().allows(level) {
        log::log!(
            target: "tincture",
            level,
            "{}",
            format_line(message, component, function)
        );
    }
}

pub fn error(message: &str, component: &str, function: &str) {
    emit(Level::Error, message, component, function);
}

pub fn warn(message: &str, component: &str, function: &str) {
    emit(Level::Warn, message, component, function);
}

pub fn info(message: &str, component: &str, function: &str) {
    emit(Level::Info, message, component, function);
}
