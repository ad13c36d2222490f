// Declare modules
pub mod alarm;
pub mod session;
pub mod settings;

// Re-export the public types so callers can `use crate::models::Settings`.
pub use alarm::AlarmSound;
pub use session::SessionKind;
pub use settings::{FontSetting, Settings, ThemeColor, TimeSettings, MAX_SESSION_MINUTES};
