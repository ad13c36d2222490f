//! Command handlers module
//!
//! Operations the UI triggers from `update` or runs through `Command::perform`.
//! Keeping them out of the application type makes them testable without a window.

use std::sync::Arc;

use log::info;

use crate::audio::AudioManager;
use crate::context::SettingsContext;
use crate::error::{AppError, AppResult};
use crate::models::{AlarmSound, Settings};

/// Settings persistence handlers
#[derive(Clone)]
pub struct SettingsHandlers {
    pub context: Arc<SettingsContext>,
}

impl SettingsHandlers {
    pub fn new(context: Arc<SettingsContext>) -> Self {
        Self { context }
    }

    /// Commits an editor draft as the new aggregate. Readers see it at once;
    /// call [`SettingsHandlers::persist`] to store it.
    pub fn apply(&self, settings: Settings) {
        info!(
            "Applying settings: {}/{}/{} min, font {}, theme {}, alarm {}",
            settings.time_settings.work,
            settings.time_settings.short_break,
            settings.time_settings.long_break,
            settings.font_setting.key(),
            settings.color_setting.key(),
            settings.alarm_sound.label()
        );
        self.context.replace(settings);
    }

    pub async fn persist(&self) -> AppResult<()> {
        self.context.persist().await
    }
}

/// Alarm audio handlers
#[derive(Clone)]
pub struct AudioHandlers {
    pub audio: Arc<AudioManager>,
}

impl AudioHandlers {
    pub fn new(audio: Arc<AudioManager>) -> Self {
        Self { audio }
    }

    /// Starts the alarm loop right away; playback itself runs on a worker.
    pub fn start_alarm(&self, sound: AlarmSound) -> AppResult<()> {
        self.audio
            .start_alarm(sound)
            .map_err(|e| AppError::audio(format!("Could not start alarm: {}", e)))
    }

    pub async fn preview(&self, sound: AlarmSound) -> AppResult<()> {
        self.audio
            .preview(sound)
            .map_err(|e| AppError::audio(format!("Could not preview sound: {}", e)))
    }

    pub fn stop_alarm(&self) -> bool {
        self.audio.stop_alarm()
    }
}

/// Combined command handlers
#[derive(Clone)]
pub struct CommandHandlers {
    pub settings: SettingsHandlers,
    pub audio: AudioHandlers,
}

impl CommandHandlers {
    pub fn new(context: &Arc<SettingsContext>, audio: &Arc<AudioManager>) -> Self {
        Self {
            settings: SettingsHandlers::new(context.clone()),
            audio: AudioHandlers::new(audio.clone()),
        }
    }
}
