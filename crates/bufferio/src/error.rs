use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A write or seek position is at or past the end of the buffer.
    #[error("buffer overrun")]
    Overrun,
    /// A read position is at or past the end of the buffer.
    #[error("end of data")]
    EndOfData,
    /// Unknown seek mode or a negative seek result.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Structured decode could not be satisfied.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

/// Failure while decoding a structured value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Fewer bytes remain than the value's encoded length.
    #[error("short buffer: need {needed} bytes, {available} available")]
    ShortBuffer { needed: usize, available: usize },
}

/// Result alias with [`BufferError`] as the error.
pub type Result<T> = std::result::Result<T, BufferError>;
