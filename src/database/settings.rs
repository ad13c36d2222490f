// file: src/database/settings.rs
use log::{info, warn};
use sqlx::SqlitePool;

use super::storage;
use crate::error::AppResult;
use crate::models::Settings;

/// Storage key holding the JSON-encoded settings aggregate.
pub const SETTINGS_KEY: &str = "pomodoroSettings";

/// Returns the stored settings, or persists and returns the defaults when the
/// entry is absent, unreadable or malformed. Never fails.
pub async fn load(pool: &SqlitePool) -> Settings {
    match storage::get(pool, SETTINGS_KEY).await {
        Ok(Some(stored)) => match serde_json::from_str::<Settings>(&stored) {
            Ok(settings) => return settings,
            Err(e) => warn!("Error parsing settings, falling back to defaults: {}", e),
        },
        Ok(None) => info!("No stored settings found, using defaults"),
        Err(e) => warn!("Failed to read settings, falling back to defaults: {}", e),
    }

    let defaults = Settings::default();
    if let Err(e) = save(pool, &defaults).await {
        warn!("Failed to persist default settings: {}", e);
    }
    defaults
}

pub async fn save(pool: &SqlitePool, settings: &Settings) -> AppResult<()> {
    let json = serde_json::to_string(settings)?;
    storage::set(pool, SETTINGS_KEY, &json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use crate::models::{AlarmSound, FontSetting, ThemeColor};
    use tempfile::TempDir;

    async fn create_test_database() -> (Database, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(&temp_dir.path().join("settings.db")).await.unwrap();
        (db, temp_dir)
    }

    #[tokio::test]
    async fn test_load_absent_persists_defaults() {
        let (db, _dir) = create_test_database().await;

        let settings = load(&db.pool).await;
        assert_eq!(settings, Settings::default());

        let stored = db.get_item(SETTINGS_KEY).await.unwrap().unwrap();
        let parsed: Settings = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let (db, _dir) = create_test_database().await;

        let mut settings = Settings::default();
        settings.time_settings.work = 40;
        settings.time_settings.long_break = 0;
        settings.font_setting = FontSetting::Slab;
        settings.color_setting = ThemeColor::VividPurple;
        settings.alarm_sound = AlarmSound::VintageWarning;

        save(&db.pool, &settings).await.unwrap();
        assert_eq!(load(&db.pool).await, settings);
    }

    #[tokio::test]
    async fn test_corrupt_entry_falls_back_and_repersists() {
        let (db, _dir) = create_test_database().await;
        db.set_item(SETTINGS_KEY, "{not json").await.unwrap();

        assert_eq!(load(&db.pool).await, Settings::default());

        let stored = db.get_item(SETTINGS_KEY).await.unwrap().unwrap();
        assert!(serde_json::from_str::<Settings>(&stored).is_ok());
    }

    #[tokio::test]
    async fn test_unknown_theme_is_malformed() {
        let (db, _dir) = create_test_database().await;
        db.set_item(
            SETTINGS_KEY,
            r#"{"timeSettings":{"pomodoro":30,"short":5,"long":15},"colorSetting":"neonGreen"}"#,
        )
        .await
        .unwrap();

        assert_eq!(load(&db.pool).await, Settings::default());
    }
}
