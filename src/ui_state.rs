//! UI state management module
//!
//! Presentation-only state that does not belong to the timer or the shared
//! settings.

use crate::editor::SettingsDraft;
use crate::models::Settings;

/// Application UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Working copy of the settings while the editor is open
    pub editor: Option<SettingsDraft>,

    /// Current window width, drives the ring radius
    pub layout_width: f32,

    /// Last status or error message shown under the dial
    pub status: String,
}

impl UiState {
    pub fn new(layout_width: f32) -> Self {
        Self {
            editor: None,
            layout_width,
            status: String::new(),
        }
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor.is_some()
    }

    /// Opens the editor seeded from the current settings. Reopening discards
    /// any previous unapplied draft.
    pub fn open_editor(&mut self, settings: &Settings) {
        self.editor = Some(SettingsDraft::from_settings(settings));
    }

    pub fn close_editor(&mut self) -> Option<SettingsDraft> {
        self.editor.take()
    }
}
