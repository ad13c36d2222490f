// file: src/database/mod.rs

use anyhow::{Context, Result};
use log::info;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePool, Sqlite};
use std::path::Path;

// Declare submodules
pub mod settings;
pub mod storage;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new(path: &Path) -> Result<Self> {
        let db_url = format!("sqlite:{}?mode=rwc", path.display());

        // Create database if it doesn't exist
        let db_exists = Sqlite::database_exists(&db_url)
            .await
            .context("Failed to check if database exists")?;
        if !db_exists {
            info!("Creating database at {}", path.display());
            Sqlite::create_database(&db_url)
                .await
                .context("Failed to create database")?;
        }

        let pool = SqlitePool::connect(&db_url)
            .await
            .context("Failed to connect to database")?;

        run_schema(&pool).await.context("Failed to run database schema")?;

        info!("Database initialized successfully");

        Ok(Database { pool })
    }

    // --- Storage Delegates ---

    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        storage::get(&self.pool, key).await
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        storage::set(&self.pool, key, value).await
    }

    // --- Settings Delegates ---

    pub async fn load_settings(&self) -> crate::models::Settings {
        settings::load(&self.pool).await
    }

    pub async fn save_settings(&self, settings: &crate::models::Settings) -> crate::error::AppResult<()> {
        settings::save(&self.pool, settings).await
    }
}

async fn run_schema(pool: &SqlitePool) -> Result<()> {
    let schema = include_str!("schema.sql");

    let mut current_statement = String::new();
    for line in schema.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }

        current_statement.push_str(line);
        current_statement.push('\n');

        if trimmed.ends_with(';') {
            sqlx::query(&current_statement).execute(pool).await?;
            current_statement.clear();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_database() -> (Database, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(&temp_dir.path().join("test.db")).await.unwrap();
        (db, temp_dir)
    }

    #[tokio::test]
    async fn test_database_new() {
        let (db, _dir) = create_test_database().await;
        assert!(!db.pool.is_closed());
    }

    #[tokio::test]
    async fn test_reopen_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reopen.db");

        let db = Database::new(&path).await.unwrap();
        db.set_item("k", "v").await.unwrap();
        db.pool.close().await;

        let db = Database::new(&path).await.unwrap();
        assert_eq!(db.get_item("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let (db, _dir) = create_test_database().await;
        run_schema(&db.pool).await.unwrap();
        run_schema(&db.pool).await.unwrap();
    }
}
