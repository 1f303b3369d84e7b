use thiserror::Error;

/// Custom error types for sayspan
#[derive(Error, Debug)]
pub enum SpanError {
    #[error("Negative duration: {0} seconds")]
    NegativeDuration(i64),
}

/// Result type for sayspan operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
