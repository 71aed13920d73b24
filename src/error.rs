use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimesheetError {
    #[error("No data found: the source table has no rows")]
    NoData,

    #[error("No date columns found in the header row before the total marker")]
    NoDateColumns,

    #[error("Cannot determine period: no entries with positive hours")]
    CannotDeterminePeriod,

    #[error("Invalid table layout: {0}")]
    InvalidLayout(String),

    #[error("Date calculation error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimesheetError>;
