//! Errors
//!
//! Custom error types used throughout the `designmetrics` crate.
use thiserror::Error;

/// Errors that can occur while computing design metrics.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Chain category is not one of the known categories.
    #[error("Unknown chain category {0}, expected one of {1}.")]
    UnknownCategory(String, String),
    /// A column required by the column info is absent from a table.
    #[error("Column {0} is missing from the {1} table.")]
    MissingColumn(String, String),
    /// First value is the column name, second is expected length, third is the provided length.
    #[error("Column {0} has {2} rows, but the table has {1} rows.")]
    ColumnLength(String, usize, usize),
    /// A feature column holds text where numbers are expected.
    #[error("Column {0} is not numeric.")]
    ColumnType(String),
    /// Unable to write object to file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
    /// Unable to read object from file.
    #[error("Unable to read from file {0}")]
    UnableToRead(String),
    /// The worker thread pool could not be created.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
}

/// Reasons a single feature column cannot be normalized and compared.
///
/// These are recovered locally by the aggregator, which records the feature
/// distance as positive infinity.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// No non-missing values to scale or compare.
    #[error("No valid values in the column.")]
    Empty,
    /// The column holds an infinite value, which cannot be min-max scaled.
    #[error("Column contains a non-finite value.")]
    NonFinite,
}
