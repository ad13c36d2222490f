//! Settings context
//!
//! Holds the single live settings aggregate for the lifetime of the UI.
//! Readers take snapshots with [`SettingsContext::get`] or follow changes
//! through [`SettingsContext::subscribe`]; the editor's apply action is the
//! only writer and goes through [`SettingsContext::replace`] followed by
//! [`SettingsContext::persist`], or both at once with [`SettingsContext::update`].

use log::{error, info};
use tokio::sync::{watch, Mutex};

use crate::database::Database;
use crate::error::AppResult;
use crate::models::Settings;

pub struct SettingsContext {
    db: Database,
    current: watch::Sender<Settings>,
    // Saves run one at a time so the store never ends on an older value
    save_lock: Mutex<()>,
}

impl SettingsContext {
    /// Starts from the defaults, then overwrites them once with whatever the
    /// store has.
    pub async fn load(db: Database) -> Self {
        let context = Self::with_settings(db, Settings::default());
        let stored = context.db.load_settings().await;
        context.current.send_replace(stored);
        info!("Settings context ready");
        context
    }

    pub fn with_settings(db: Database, settings: Settings) -> Self {
        let (current, _) = watch::channel(settings);
        Self {
            db,
            current,
            save_lock: Mutex::new(()),
        }
    }

    pub fn get(&self) -> Settings {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.current.subscribe()
    }

    /// Replaces the whole aggregate and notifies subscribers.
    pub fn replace(&self, settings: Settings) {
        self.current.send_replace(settings);
    }

    /// Writes the latest aggregate to the store. Whatever order concurrent
    /// calls finish in, the last write carries the newest value.
    pub async fn persist(&self) -> AppResult<()> {
        let _guard = self.save_lock.lock().await;
        let latest = self.get();

        if let Err(e) = self.db.save_settings(&latest).await {
            error!("Failed to persist settings: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Replaces the whole aggregate, notifies subscribers, then persists it.
    ///
    /// The in-memory replacement happens even if persisting fails.
    pub async fn update(&self, settings: Settings) -> AppResult<()> {
        self.replace(settings);
        self.persist().await
    }
}
