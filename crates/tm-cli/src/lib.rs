//! TypeMatch CLI Library
//!
//! Command-line front end for building `Variable`s from typed, unordered
//! arguments and for running the built-in demonstration scenarios.

pub mod cli;
pub mod commands;
pub mod diagnostics;

pub mod error {
    use crate::diagnostics::ArgumentDiagnostic;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error(transparent)]
        Build(#[from] tm_variable::Error),

        #[error("{0}")]
        Rejected(Box<ArgumentDiagnostic>),
    }

    pub type Result<T> = std::result::Result<T, CliError>;

}

pub use error::{CliError, Result};
