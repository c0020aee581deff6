//! Error types for tfhelpers

/// Error type for conversion, time and logging helpers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("invalid float: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("invalid boolean: {0:?}")]
    ParseBool(String),

    #[error("invalid timestamp: {0}")]
    ParseTimestamp(#[from] chrono::ParseError),

    #[error("unix timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for tfhelpers operations
pub type Result<T> = std::result::Result<T, Error>;
