use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    /// No rule of the resolution chain could reduce the value.
    #[error("Type is not JSON serializable: {type_name}")]
    TypeMismatch { type_name: String },

    #[error("recursion limit reached ({limit} levels)")]
    RecursionLimit { limit: usize },

    #[error("numeric array shape expects {expected} elements, buffer holds {actual}")]
    InvalidShape { expected: usize, actual: usize },

    #[error("numeric array shape {shape:?} has more elements than fit in usize")]
    ShapeOverflow { shape: Vec<usize> },

    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn type_mismatch(type_name: impl Into<String>) -> Self {
        Error::TypeMismatch {
            type_name: type_name.into(),
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
