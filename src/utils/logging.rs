use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::env;
use std::io::Write;

use crate::timer::TimerPhase;

pub fn init_logging() -> Result<(), SetLoggerError> {
    let env = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level = parse_level(&env);

    let mut builder = Builder::from_default_env();

    // Customize format for better readability
    builder.format(|buf, record| {
        let timestamp = buf.timestamp();
        let target = record.target();
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        match record.level() {
            Level::Info => {
                writeln!(buf, "{} [INFO] [{}]: {}", timestamp, target, record.args())
            }
            level => {
                writeln!(
                    buf,
                    "{} [{}] [{}:{}] {}: {}",
                    timestamp, level, file, line, target, record.args()
                )
            }
        }
    });

    // The renderer stack is chatty at info level
    if env::var("POMODIAL_ENV").unwrap_or_else(|_| "development".to_string()) == "production" {
        builder.filter_module("sqlx", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
        builder.filter_module("wgpu_core", LevelFilter::Warn);
        builder.filter_module("naga", LevelFilter::Warn);
        builder.filter_module("iced_wgpu", LevelFilter::Warn);
        builder.filter_module("cosmic_text", LevelFilter::Warn);
    }

    builder.filter_level(log_level).target(Target::Stdout).try_init()
}

fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn log_error_with_context(error: &anyhow::Error, context: &str) {
    log::error!("[{}] {}", context, error);

    // Log chain of causes for better debugging
    for cause in error.chain().skip(1) {
        log::error!("  Caused by: {}", cause);
    }
}

pub fn log_transition(from: TimerPhase, to: TimerPhase) {
    if from != to {
        log::debug!("[Timer] {} -> {}", from, to);
    }
}
