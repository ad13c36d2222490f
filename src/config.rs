//! Runtime configuration
//!
//! Paths come from the environment when set, otherwise from the platform
//! data directory.

use crate::error::{AppError, AppResult};
use log::info;
use std::env;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "POMODIAL_DB_PATH";
pub const SOUNDS_DIR_ENV: &str = "POMODIAL_SOUNDS_DIR";

/// Development checkout location of the alarm assets
const DEV_SOUNDS_DIR: &str = "assets/audios";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub sounds_dir: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let db_path = env::var_os(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| app_data_dir().join("pomodial.db"));

        let sounds_dir = env::var_os(SOUNDS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_sounds_dir);

        Self {
            db_path,
            sounds_dir,
            window_width: 800.0,
            window_height: 720.0,
        }
    }
}

pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pomodial")
}

fn default_sounds_dir() -> PathBuf {
    let dev_sounds = PathBuf::from(DEV_SOUNDS_DIR);
    if dev_sounds.is_dir() {
        dev_sounds
    } else {
        app_data_dir().join("sounds")
    }
}

/// Makes sure the database location is usable before anything connects to it.
pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    if config.db_path.as_os_str().is_empty() {
        return Err(AppError::config("database path is empty"));
    }

    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            info!("Created data directory: {:?}", parent);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with_db(db_path: PathBuf) -> AppConfig {
        AppConfig {
            db_path,
            sounds_dir: PathBuf::from("sounds"),
            window_width: 800.0,
            window_height: 720.0,
        }
    }

    #[test]
    fn test_validation_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("pomodial.db");

        validate_config(&config_with_db(db_path.clone())).unwrap();
        assert!(db_path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_validation_rejects_empty_path() {
        let result = validate_config(&config_with_db(PathBuf::new()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_bare_file_name_is_valid() {
        assert!(validate_config(&config_with_db(PathBuf::from("pomodial.db"))).is_ok());
    }

    #[test]
    fn test_default_paths_are_under_app_dir() {
        assert!(app_data_dir().ends_with("pomodial"));
    }
}
