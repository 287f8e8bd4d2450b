use thiserror::Error;

/// Everything that can stop a deadline from being produced.
///
/// The first three variants are input problems a form would simply refuse to compute on.
#[derive(Error, Debug)]
pub enum DeadlineError {
    #[error("Missing input: {field} is required")]
    MissingInput { field: &'static str },

    #[error("Invalid day count '{input}': expected a positive whole number of days")]
    InvalidDayCount { input: String },

    #[error("Invalid start date '{input}': expected YYYY-MM-DD")]
    InvalidStartDate { input: String },

    #[error("Date out of range: counting from {start} runs past the last representable date")]
    OutOfRange { start: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeadlineError {
    /// Whether the error comes from user-supplied request values rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DeadlineError::MissingInput { .. }
                | DeadlineError::InvalidDayCount { .. }
                | DeadlineError::InvalidStartDate { .. }
                | DeadlineError::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DeadlineError>;
