// Pomodial Library
// Exposes core functionality for testing and reuse

pub mod app;
pub mod audio;
pub mod command_handlers;
pub mod config;
pub mod context;
pub mod database;
pub mod editor;
pub mod error;
pub mod messages;
pub mod models;
pub mod timer;
pub mod ui;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use app::PomodialApp;
pub use audio::AudioManager;
pub use context::SettingsContext;
pub use database::Database;
pub use editor::SettingsDraft;
pub use error::{AppError, AppResult};
pub use models::*;
pub use timer::{format_time, RingGeometry, Timer, TimerEvent, TimerPhase};
