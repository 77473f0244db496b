use std::{path::PathBuf, time::Duration};

use dirs::preference_dir;

pub const APP_NAME: &str = "mazeview";

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 60;
pub const DEFAULT_SIZE: usize = 10;

pub const MIN_DELAY_MS: u64 = 0;
pub const MAX_DELAY_MS: u64 = 500;
pub const DEFAULT_DELAY_MS: u64 = 50;

/// Pause after the last frame of an animated run.
pub const FINAL_FRAME_HOLD: Duration = Duration::from_millis(300);

pub fn base_path() -> Option<PathBuf> {
    preference_dir().map(|dir| dir.join(APP_NAME))
}
