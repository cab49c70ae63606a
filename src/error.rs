use std::num::ParseIntError;
use thiserror::Error;

/// Malformed id, id range or id set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdFormatError {
    #[error("invalid id '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Negative numbers are not allowed")]
    NegativeNumber,

    #[error("Missing end id in range specification")]
    MissingRangeEnd,

    #[error("Too many dashes in id range")]
    TooManyDashes,

    #[error("Range end id cannot be larger than begin id")]
    ReversedRange,

    #[error("Too many ids in id set (at most {max})")]
    TooManyIds { max: i64 },

    #[error("Unexpected comma at beginning of id set")]
    LeadingComma,

    #[error("Unexpected comma at end of id set")]
    TrailingComma,

    #[error("Unexpected comma in middle of id set")]
    EmptySegment,
}

/// All possible errors in the todo manager
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Invalid option combination")]
    InvalidMode,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Could not connect to the database")]
    Connect(#[source] rusqlite::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
