use std::{
    fs,
    path::{Path, PathBuf},
};

use mazework::{algorithms::GenAlgorithm, solvers::SolveAlgorithm};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{self, base_path},
    error::AppError,
};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Contents of `settings.ron`. Missing fields fall back to built-in defaults.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub generator: Option<String>,
    #[serde(default)]
    pub solver: Option<String>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub solve: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn default_path() -> Result<PathBuf, AppError> {
        base_path()
            .map(|dir| dir.join("settings.ron"))
            .ok_or(AppError::NoConfigDir)
    }

    pub fn get_width(&self) -> usize {
        self.width.unwrap_or(constants::DEFAULT_SIZE)
    }

    pub fn get_height(&self) -> usize {
        self.height.unwrap_or(constants::DEFAULT_SIZE)
    }

    pub fn get_delay_ms(&self) -> u64 {
        self.delay_ms.unwrap_or(constants::DEFAULT_DELAY_MS)
    }

    pub fn get_generator(&self) -> Result<GenAlgorithm, AppError> {
        match &self.generator {
            Some(name) => Ok(name.parse::<GenAlgorithm>()?),
            None => Ok(GenAlgorithm::default()),
        }
    }

    pub fn get_solver(&self) -> Result<SolveAlgorithm, AppError> {
        match &self.solver {
            Some(name) => Ok(name.parse::<SolveAlgorithm>()?),
            None => Ok(SolveAlgorithm::default()),
        }
    }

    pub fn get_animate(&self) -> bool {
        self.animate.unwrap_or(true)
    }

    pub fn get_solve(&self) -> bool {
        self.solve.unwrap_or(true)
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    /// Checks size and delay against the bounds the viewer supports.
    pub fn validate(&self) -> Result<(), AppError> {
        let (min, max) = (constants::MIN_SIZE as u64, constants::MAX_SIZE as u64);
        AppError::check_range("width", self.get_width() as u64, min, max)?;
        AppError::check_range("height", self.get_height() as u64, min, max)?;
        AppError::check_range(
            "delay_ms",
            self.get_delay_ms(),
            constants::MIN_DELAY_MS,
            constants::MAX_DELAY_MS,
        )?;
        self.get_generator()?;
        self.get_solver()?;
        Ok(())
    }

    fn parse(path: &Path, text: &str) -> Result<Self, AppError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options
            .from_str(text)
            .map_err(|source| AppError::Settings {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Reads the settings file, creating it from the defaults if it is missing.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&path, &text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::reset_config(&path)?;
                Self::parse(&path, DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
