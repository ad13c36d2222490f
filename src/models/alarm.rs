// file: src/models/alarm.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compiled-in catalog of alarm sounds. The persisted value is the kebab-case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlarmSound {
    #[default]
    ClassicAlarm,
    FacilityAlarm,
    RoosterCrowing,
    SecurityBreach,
    SoundAlert,
    VintageWarning,
    WarningBuzzer,
}

impl AlarmSound {
    pub const ALL: [AlarmSound; 7] = [
        AlarmSound::ClassicAlarm,
        AlarmSound::FacilityAlarm,
        AlarmSound::RoosterCrowing,
        AlarmSound::SecurityBreach,
        AlarmSound::SoundAlert,
        AlarmSound::VintageWarning,
        AlarmSound::WarningBuzzer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlarmSound::ClassicAlarm => "Classic Alarm",
            AlarmSound::FacilityAlarm => "Facility Alarm",
            AlarmSound::RoosterCrowing => "Rooster Crowing",
            AlarmSound::SecurityBreach => "Security Breach",
            AlarmSound::SoundAlert => "Sound Alert",
            AlarmSound::VintageWarning => "Vintage Warning",
            AlarmSound::WarningBuzzer => "Warning Buzzer",
        }
    }

    /// File name of the asset inside the sounds directory
    pub fn asset_file(&self) -> &'static str {
        match self {
            AlarmSound::ClassicAlarm => "classic-alarm.wav",
            AlarmSound::FacilityAlarm => "facility-alarm-sound.wav",
            AlarmSound::RoosterCrowing => "rooster-crowing-in-the-morning.wav",
            AlarmSound::SecurityBreach => "security-facility-breach-alarm.wav",
            AlarmSound::SoundAlert => "sound-alert-in-hall.wav",
            AlarmSound::VintageWarning => "vintage-warning-alarm.wav",
            AlarmSound::WarningBuzzer => "warning-alarm-buzzer.wav",
        }
    }
}

// pick_list renders options through Display
impl fmt::Display for AlarmSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
