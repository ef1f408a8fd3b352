use thiserror::Error;
use wordseed_types::error::WordseedError;

/// Errors surfaced by the `wordseed` command line.
#[derive(Debug, Error)]
#[allow(clippy::enum_variant_names)]
pub enum CliError {
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error(transparent)]
    Wordseed(#[from] WordseedError),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::SerializationError(e.to_string())
    }
}
