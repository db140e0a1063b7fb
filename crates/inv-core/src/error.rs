use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter {name}: {value} (must be a positive, finite number)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid parameter {name}: {value} (must not exceed {max})")]
    ParameterTooLarge {
        name: &'static str,
        value: f64,
        max: f64,
    },

    #[error("precision must be between 1 and 15, got {0}")]
    InvalidPrecision(usize),

    #[error("unknown analysis type: {0}")]
    UnknownAnalysis(String),

    #[error("report has no {0} series")]
    MissingSeries(&'static str),

    #[error("series length mismatch: expected {expected} points, got {actual}")]
    SeriesLengthMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
