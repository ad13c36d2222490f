// Pomodial - Pomodoro timer with a progress dial
// Main entry point for iced application

use std::sync::Arc;

use iced::{Application, Settings as IcedSettings};
use log::{error, info, warn};

use pomodial::audio::AudioManager;
use pomodial::config::{validate_config, AppConfig};
use pomodial::context::SettingsContext;
use pomodial::database::Database;
use pomodial::utils::logging::{init_logging, log_error_with_context};
use pomodial::PomodialApp;

#[tokio::main]
async fn main() -> iced::Result {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting Pomodial");

    let config = AppConfig::from_env();
    if let Err(e) = validate_config(&config) {
        error!("Invalid configuration: {}", e);
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Settings storage is required; everything else degrades
    let db = match Database::new(&config.db_path).await {
        Ok(database) => database,
        Err(e) => {
            log_error_with_context(&e, "database");
            eprintln!("Failed to open settings store at {:?}", config.db_path);
            eprintln!("Please check your system and try again.");
            std::process::exit(1);
        }
    };
    let context = Arc::new(SettingsContext::load(db).await);

    if let Err(e) = AudioManager::ensure_sound_directory(&config.sounds_dir) {
        warn!("Could not prepare sounds directory: {}", e);
    }
    let audio = match AudioManager::new(config.sounds_dir.clone()) {
        Ok(audio_manager) => Arc::new(audio_manager),
        Err(e) => {
            warn!("Failed to initialize audio system: {}", e);
            warn!("Continuing without audio - alarms will be silent");
            Arc::new(AudioManager::new_dummy())
        }
    };

    PomodialApp::run(IcedSettings {
        flags: (context, audio, config.window_width),
        window: iced::window::Settings {
            size: iced::Size::new(config.window_width, config.window_height),
            min_size: Some(iced::Size::new(375.0, 640.0)),
            resizable: true,
            ..Default::default()
        },
        id: None,
        fonts: vec![],
        default_font: Default::default(),
        default_text_size: iced::Pixels(16.0),
        antialiasing: true,
    })
}
