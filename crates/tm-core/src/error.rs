use std::result;
use thiserror::Error;

/// Rejection of an argument set, raised before any field is resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("argument #{position} of type `{type_name}` does not match any field of `{shape}`")]
    Unrecognized {
        shape: &'static str,
        type_name: &'static str,
        position: usize,
    },
    #[error(
        "arguments #{first} and #{second} both supply field `{field}` (`{type_name}`) of `{shape}`"
    )]
    Duplicate {
        shape: &'static str,
        field: &'static str,
        type_name: &'static str,
        first: usize,
        second: usize,
    },
}

pub type Result<T> = result::Result<T, MatchError>;
