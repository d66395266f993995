use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The dialect configuration cannot drive the scanner.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("row {row}, column {column}: {message}")]
    Shape {
        row: usize,
        column: usize,
        message: String,
    },

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
