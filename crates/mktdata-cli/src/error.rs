use mktdata_core::{CoreError, ModelError, SourceError, SourceErrorKind, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Model(_) | Self::Usage(_) => 2,
            Self::NotFound(_) => 3,
            Self::Source(error) => match error.kind() {
                SourceErrorKind::InvalidRequest => 2,
                SourceErrorKind::NotFound => 3,
                SourceErrorKind::PriceMismatch => 4,
                SourceErrorKind::Unavailable | SourceErrorKind::Internal => 10,
            },
            Self::Command(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::Model(error) => Self::Model(error),
            CoreError::Source(error) => Self::Source(error),
            CoreError::Serialization(error) => Self::Serialization(error),
            CoreError::Io(error) => Self::Io(error),
        }
    }
}
