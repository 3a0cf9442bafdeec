use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn submission<S: Into<String>>(msg: S) -> Self {
        Self::Submission(msg.into())
    }

    /// Whether the message can be shown to the patient or written to logs
    /// without leaking contact details or file-system paths.
    pub fn is_pii_safe(&self) -> bool {
        match self {
            Self::Io(_) | Self::Json(_) | Self::Anyhow(_) => false,
            Self::Config(_) | Self::InvalidInput(_) | Self::Submission(_) => true,
        }
    }

    pub fn to_safe_string(&self) -> String {
        if self.is_pii_safe() {
            self.to_string()
        } else {
            match self {
                Self::Io(_) => "Could not read a local file".to_string(),
                Self::Json(_) => "Configuration file is not valid JSON".to_string(),
                Self::Anyhow(_) => "Operation failed".to_string(),
                _ => self.to_string(),
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
