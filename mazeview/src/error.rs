use std::{io, path::PathBuf};

use mazework::MazeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("Error reading settings file ({path:?}): {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("No preference directory on this platform")]
    NoConfigDir,
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Maze worker panicked")]
    WorkerPanicked,
}

impl AppError {
    /// Fails with [`AppError::OutOfRange`] unless `min <= value <= max`.
    pub fn check_range(name: &'static str, value: u64, min: u64, max: u64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(AppError::OutOfRange {
                name,
                value,
                min,
                max,
            })
        }
    }
}
