//! Log sink behind the status bar and the log panel
//!
//! Messages from this workspace are kept from `Info` up. egui, eframe and
//! the windowing/GPU stack only get through from `Warn` up, so their chatter
//! never hides the last preview message in the status bar.

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Where a log line came from, derived from its `log` target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSource {
    /// The `screen_preview` library: derivations, pattern rendering, I/O
    Core,
    /// This binary: form and preview handling
    Gui,
    /// Anything else (egui, eframe, winit, wgpu, ...)
    Framework,
}

impl LogSource {
    pub fn from_target(target: &str) -> Self {
        // Module paths, so the GUI prefix must be checked first
        if target.starts_with("screen_preview_gui") {
            LogSource::Gui
        } else if target.starts_with("screen_preview") {
            LogSource::Core
        } else {
            LogSource::Framework
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LogSource::Core => "core",
            LogSource::Gui => "gui",
            LogSource::Framework => "egui",
        }
    }

    /// Least severe level kept for this source
    fn threshold(self) -> Level {
        match self {
            LogSource::Core | LogSource::Gui => Level::Info,
            LogSource::Framework => Level::Warn,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub source: LogSource,
    pub message: String,
}

impl LogEntry {
    /// Warnings and errors, which the status bar highlights
    pub fn needs_attention(&self) -> bool {
        self.level <= Level::Warn
    }
}

/// Bounded history of recent log entries, shared with the UI
#[derive(Clone)]
pub struct AppLogger {
    history: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl AppLogger {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Install as the global `log` backend
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Info);
        Ok(())
    }

    fn history(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        // Entries are pushed whole, so a poisoned lock still holds a valid history
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.history().iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<LogEntry> {
        self.history().back().cloned()
    }

    pub fn clear(&self) {
        self.history().clear();
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LogSource::from_target(metadata.target()).threshold()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            source: LogSource::from_target(record.target()),
            message: record.args().to_string(),
        };

        let mut history = self.history();
        if history.len() == self.capacity {
            history.pop_front();
        }
        history.push_back(entry);
    }

    fn flush(&self) {}
}
