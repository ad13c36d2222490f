use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn audio<S: Into<String>>(msg: S) -> Self {
        Self::Audio(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(AppError::audio("no device").to_string(), "Audio error: no device");
        assert_eq!(
            AppError::config("empty path").to_string(),
            "Configuration error: empty path"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Serialization(_)));
    }
}
