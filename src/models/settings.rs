// file: src/models/settings.rs
use serde::{Deserialize, Serialize};

use super::alarm::AlarmSound;
use super::session::SessionKind;

/// Upper bound the editor enforces on any session length, in minutes.
pub const MAX_SESSION_MINUTES: u32 = 999;

/// Per-session durations in minutes. Zero is allowed and completes instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    #[serde(rename = "pomodoro")]
    pub work: u32,
    #[serde(rename = "short")]
    pub short_break: u32,
    #[serde(rename = "long")]
    pub long_break: u32,
}

impl TimeSettings {
    pub fn minutes(&self, session: SessionKind) -> u32 {
        match session {
            SessionKind::Work => self.work,
            SessionKind::ShortBreak => self.short_break,
            SessionKind::LongBreak => self.long_break,
        }
    }

    pub fn set_minutes(&mut self, session: SessionKind, minutes: u32) {
        match session {
            SessionKind::Work => self.work = minutes,
            SessionKind::ShortBreak => self.short_break = minutes,
            SessionKind::LongBreak => self.long_break = minutes,
        }
    }

    pub fn total_seconds(&self, session: SessionKind) -> u32 {
        self.minutes(session).saturating_mul(60)
    }
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSetting {
    #[default]
    Sans,
    Slab,
    Mono,
}

impl FontSetting {
    pub const ALL: [FontSetting; 3] = [FontSetting::Sans, FontSetting::Slab, FontSetting::Mono];

    pub fn key(&self) -> &'static str {
        match self {
            FontSetting::Sans => "sans",
            FontSetting::Slab => "slab",
            FontSetting::Mono => "mono",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeColor {
    #[default]
    WarmPink,
    CoolCyan,
    VividPurple,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 3] = [
        ThemeColor::WarmPink,
        ThemeColor::CoolCyan,
        ThemeColor::VividPurple,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ThemeColor::WarmPink => "warmPink",
            ThemeColor::CoolCyan => "coolCyan",
            ThemeColor::VividPurple => "vividPurple",
        }
    }

    /// Display color as 8-bit RGB
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ThemeColor::WarmPink => (0xf8, 0x70, 0x70),
            ThemeColor::CoolCyan => (0x70, 0xf3, 0xf8),
            ThemeColor::VividPurple => (0xd8, 0x81, 0xf8),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// The persisted preferences aggregate.
///
/// Always replaced as a whole. Missing top-level fields deserialize from the
/// defaults so older blobs keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub time_settings: TimeSettings,
    #[serde(default)]
    pub font_setting: FontSetting,
    #[serde(default)]
    pub color_setting: ThemeColor,
    #[serde(default)]
    pub alarm_sound: AlarmSound,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_settings: TimeSettings::default(),
            font_setting: FontSetting::Sans,
            color_setting: ThemeColor::WarmPink,
            alarm_sound: AlarmSound::ClassicAlarm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.time_settings.work, 25);
        assert_eq!(settings.time_settings.short_break, 5);
        assert_eq!(settings.time_settings.long_break, 15);
        assert_eq!(settings.font_setting, FontSetting::Sans);
        assert_eq!(settings.color_setting, ThemeColor::WarmPink);
        assert_eq!(settings.alarm_sound, AlarmSound::ClassicAlarm);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["timeSettings"]["pomodoro"], 25);
        assert_eq!(json["timeSettings"]["short"], 5);
        assert_eq!(json["timeSettings"]["long"], 15);
        assert_eq!(json["fontSetting"], "sans");
        assert_eq!(json["colorSetting"], "warmPink");
        assert_eq!(json["alarmSound"], "classic-alarm");
    }

    #[test]
    fn test_missing_fields_merge_with_defaults() {
        let json = r#"{"timeSettings":{"pomodoro":50,"short":10,"long":20},"fontSetting":"mono","colorSetting":"coolCyan"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.time_settings.work, 50);
        assert_eq!(settings.font_setting, FontSetting::Mono);
        assert_eq!(settings.color_setting, ThemeColor::CoolCyan);
        assert_eq!(settings.alarm_sound, AlarmSound::ClassicAlarm);
    }

    #[test]
    fn test_negative_minutes_rejected() {
        let json = r#"{"timeSettings":{"pomodoro":-1,"short":5,"long":15}}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }

    #[test]
    fn test_time_settings_by_session() {
        let mut time = TimeSettings::default();
        assert_eq!(time.total_seconds(SessionKind::Work), 1500);
        assert_eq!(time.total_seconds(SessionKind::ShortBreak), 300);

        time.set_minutes(SessionKind::LongBreak, 0);
        assert_eq!(time.minutes(SessionKind::LongBreak), 0);
        assert_eq!(time.total_seconds(SessionKind::LongBreak), 0);
    }

    #[test]
    fn test_theme_colors() {
        assert_eq!(ThemeColor::WarmPink.hex(), "#f87070");
        assert_eq!(ThemeColor::CoolCyan.hex(), "#70f3f8");
        assert_eq!(ThemeColor::VividPurple.hex(), "#d881f8");
        assert_eq!(ThemeColor::VividPurple.key(), "vividPurple");
        assert_eq!(FontSetting::Slab.key(), "slab");
    }
}
