use crate::models::{AlarmSound, FontSetting, SessionKind, Settings, ThemeColor};

/// Unified application message type
///
/// This enum handles all message types throughout the application.
/// Messages are organized by domain for better maintainability.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Session & Timer Messages =====
    /// A session tab was pressed
    SessionSelected(SessionKind),
    /// START / PAUSE
    ToggleTimer,
    ResetTimer,
    StopAlarm,
    /// One second elapsed while running
    Tick,

    // ===== Settings Editor Messages =====
    OpenSettings,
    /// Close without applying the draft
    CloseSettings,
    ApplySettings,
    DraftIncrement(SessionKind),
    DraftDecrement(SessionKind),
    /// Raw text typed into a minutes field
    DraftMinutesInput(SessionKind, String),
    DraftFont(FontSetting),
    DraftTheme(ThemeColor),
    DraftAlarm(AlarmSound),
    /// Play the draft's alarm sound once
    PreviewAlarm,

    // ===== Async Operation Result Messages =====
    /// The shared settings were replaced
    SettingsChanged(Settings),
    /// Persisting the applied settings completed
    SettingsSaved(Result<(), String>),
    /// Preview playback startup completed
    PreviewResult(Result<(), String>),

    // ===== Window Messages =====
    /// Window width changed
    LayoutResized(f32),
}
