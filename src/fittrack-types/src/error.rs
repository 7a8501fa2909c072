use thiserror::Error;

use crate::ActivityTag;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown activity type `{0}`")]
    UnknownActivityType(String),
    #[error("{tag} expects {expected} values, got {actual}")]
    ArityMismatch {
        tag: ActivityTag,
        expected: usize,
        actual: usize,
    },
    #[error("invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}
