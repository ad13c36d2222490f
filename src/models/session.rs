// file: src/models/session.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three timer modes a user can pick from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionKind {
    #[default]
    #[serde(rename = "pomodoro")]
    Work,
    #[serde(rename = "short")]
    ShortBreak,
    #[serde(rename = "long")]
    LongBreak,
}

impl SessionKind {
    pub const ALL: [SessionKind; 3] = [
        SessionKind::Work,
        SessionKind::ShortBreak,
        SessionKind::LongBreak,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Work => "pomodoro",
            SessionKind::ShortBreak => "short break",
            SessionKind::LongBreak => "long break",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
