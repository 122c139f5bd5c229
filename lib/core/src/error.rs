use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Restaurant not found: {0}")]
    NotFound(String),

    #[error("Pipeline not ready: catalog build has not completed")]
    NotReady,

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A catalog row the pipeline cannot default.
///
/// `row` is the zero-based position of the record in the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("row {row}: required field '{field}' is missing")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: field '{field}' is not numeric: {value}")]
    NotNumeric {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: average cost cannot be negative ({value})")]
    NegativeCost { row: usize, value: f64 },

    #[error("row {row}: field '{field}' is not a finite number")]
    NonFinite { row: usize, field: &'static str },
}
