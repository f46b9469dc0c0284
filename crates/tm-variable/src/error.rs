use crate::parse::ParseArgError;
use thiserror::Error;
use tm_core::MatchError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseArgError),
    #[error(transparent)]
    Match(#[from] MatchError),
}

pub type Result<T> = std::result::Result<T, Error>;
