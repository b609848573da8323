use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("Malformed token '{token}': {cause}")]
    MalformedToken { token: String, cause: String },
    #[error("Unsupported era in '{input}'")]
    UnsupportedEra { input: String },
    #[error("Nothing to parse after removing decorations")]
    EmptyOrWhitespaceInput,
    #[error("Inverted range: {from} is after {to}")]
    InvertedRange { from: NaiveDate, to: NaiveDate },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DateError>;

impl DateError {
    pub(crate) fn malformed(token: &str, cause: impl Into<String>) -> Self {
        Self::MalformedToken { token: token.to_string(), cause: cause.into() }
    }
}

// Helper conversions
impl From<config::ConfigError> for DateError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

impl From<serde_json::Error> for DateError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}
