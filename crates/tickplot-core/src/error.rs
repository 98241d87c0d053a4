use thiserror::Error;

/// Validation and contract errors exposed by `tickplot-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },
    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be greater than zero")]
    NonPositiveValue { field: &'static str },
    #[error("margins leave no plot area: outer {outer_width}x{outer_height}")]
    MarginTooLarge { outer_width: u32, outer_height: u32 },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Failures while reading a chart dataset into raw records.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed chart dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("chart dataset reported an error: {message}")]
    Upstream { message: String },
    #[error("chart dataset contains no result")]
    MissingResult,
    #[error("chart dataset contains no quote indicators")]
    MissingQuote,
    #[error(transparent)]
    Timestamp(#[from] ValidationError),
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
