use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid profile line: {0}")]
    InvalidGeometry(&'static str),
    #[error("Buffer distance must be a positive number, got {0}")]
    InvalidBufferDistance(f64),
    #[error("The point source yielded no records")]
    EmptyInput,
    #[error("The point source has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("Malformed point record: {0}")]
    MalformedRecord(String),
    #[error(transparent)]
    LasError(#[from] las::Error),
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
