//! Settings editor draft
//!
//! A local copy of the settings that the modal mutates freely. Nothing is
//! shared until [`SettingsDraft::apply`] hands the whole draft back as a new
//! aggregate; dropping the draft discards it.

use crate::models::{AlarmSound, FontSetting, SessionKind, Settings, ThemeColor, TimeSettings, MAX_SESSION_MINUTES};
use crate::utils::digits_only;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub time: TimeSettings,
    pub font: FontSetting,
    pub theme: ThemeColor,
    pub alarm: AlarmSound,
}

impl SettingsDraft {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            time: settings.time_settings,
            font: settings.font_setting,
            theme: settings.color_setting,
            alarm: settings.alarm_sound,
        }
    }

    /// Called when the shared settings change while the editor is open.
    pub fn resync(&mut self, settings: &Settings) {
        *self = Self::from_settings(settings);
    }

    pub fn increment(&mut self, session: SessionKind) {
        let minutes = self.time.minutes(session).saturating_add(1);
        self.time.set_minutes(session, minutes.min(MAX_SESSION_MINUTES));
    }

    /// Never goes below zero.
    pub fn decrement(&mut self, session: SessionKind) {
        let minutes = self.time.minutes(session).saturating_sub(1);
        self.time.set_minutes(session, minutes);
    }

    /// Free-text entry: non-digits are stripped, empty input means zero and
    /// anything beyond the cap is clamped to it.
    pub fn set_minutes_from_text(&mut self, session: SessionKind, input: &str) {
        let digits = digits_only(input);
        let minutes = if digits.is_empty() {
            0
        } else {
            digits.parse::<u32>().unwrap_or(MAX_SESSION_MINUTES)
        };
        self.time.set_minutes(session, minutes.min(MAX_SESSION_MINUTES));
    }

    pub fn set_font(&mut self, font: FontSetting) {
        self.font = font;
    }

    pub fn set_theme(&mut self, theme: ThemeColor) {
        self.theme = theme;
    }

    pub fn set_alarm(&mut self, alarm: AlarmSound) {
        self.alarm = alarm;
    }

    pub fn apply(&self) -> Settings {
        Settings {
            time_settings: self.time,
            font_setting: self.font,
            color_setting: self.theme,
            alarm_sound: self.alarm,
        }
    }
}
