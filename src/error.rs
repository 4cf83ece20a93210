use thiserror::Error;

/// Main error type for the league stats bot
#[derive(Error, Debug)]
pub enum RinkError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Ingestion errors
    #[error("Invalid game row: {0}")]
    InvalidGameRow(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for RinkError
pub type Result<T> = std::result::Result<T, RinkError>;

impl RinkError {
    pub fn invalid_row(reason: impl Into<String>) -> Self {
        RinkError::InvalidGameRow(reason.into())
    }
}
