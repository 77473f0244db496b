use std::{
    io::{self, Write},
    sync::{Mutex, MutexGuard, OnceLock, PoisonError, RwLock},
    time::Instant,
};

use colored::Colorize;
use log::{Log, Metadata, Record};

use crate::error::AppError;

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::LevelFilter::Warn))
}

/// Installs the buffered logger. Records are kept until [`Log::flush`] since
/// the terminal is busy with the maze while a run is animated.
pub fn init(level: log::LevelFilter) -> Result<(), AppError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: log::Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

impl Message {
    fn format(&self, started: Instant) -> String {
        let level = match self.level {
            log::Level::Error => "ERROR".red(),
            log::Level::Warn => "WARN ".yellow(),
            log::Level::Info => "INFO ".green(),
            log::Level::Debug => "DEBUG".blue(),
            log::Level::Trace => "TRACE".dimmed(),
        };
        let at = self.pushed.saturating_duration_since(started).as_secs_f32();

        format!("[{at:8.3}] {level} {}: {}", self.source.dimmed(), self.message)
    }
}

pub struct AppLogger {
    min_level: RwLock<log::LevelFilter>,
    started: Instant,
    logs: Mutex<Vec<Message>>,
}

impl AppLogger {
    fn new(min_level: log::LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            started: Instant::now(),
            logs: Mutex::new(Vec::new()),
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: log::LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    fn borrow_mut_logs(&self) -> MutexGuard<'_, Vec<Message>> {
        // a panicking writer can't leave the buffer half pushed
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes and returns every buffered message, oldest first.
    pub fn take_logs(&self) -> Vec<Message> {
        std::mem::take(&mut *self.borrow_mut_logs())
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for message in self.take_logs() {
            writeln!(out, "{}", message.format(self.started))?;
        }
        Ok(())
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.borrow_mut_logs().push(Message {
                level: record.level(),
                pushed: Instant::now(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {
        let _ = self.write_to(&mut io::stderr().lock());
    }
}
