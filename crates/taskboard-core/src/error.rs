use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// True for rejections of a user intent, as opposed to infrastructure failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}
