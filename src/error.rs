//! Error handling for the skill gap analyzer

use thiserror::Error;

/// Shown when a transport failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Failed to analyze resume. Please check the backend connection.";

#[derive(Error, Debug)]
pub enum SkillGapError {
    /// No resume selected; raised locally, the network is never contacted.
    #[error("{0}")]
    Validation(String),

    /// Connection, DNS or other transport failure.
    #[error("{0}")]
    Transport(String),

    /// Backend answered outside the 2xx range.
    #[error("Server responded with status: {status}{}", format_detail(.detail))]
    HttpStatus { status: u16, detail: Option<String> },

    /// Backend answered 2xx but the payload carries an `error` field.
    #[error("{0}")]
    Application(String),

    #[error("Invalid response from server: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl SkillGapError {
    /// Message stored in the request state and shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            SkillGapError::Transport(msg) if msg.trim().is_empty() => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" ({})", d),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SkillGapError>;

impl From<reqwest::Error> for SkillGapError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SkillGapError::Decode(err.to_string());
        }

        // reqwest's top-level message hides the cause ("error sending request for url")
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        SkillGapError::Transport(message)
    }
}
