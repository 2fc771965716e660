//! Error types for the psyche engine.
//!
//! Scoring itself never fails: invalid or missing answer values are
//! defaulted and counted, and catalog lookups fall back to declared
//! defaults. Errors exist only at the static-data boundary, where
//! reference catalogs are constructed and validated at process start.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("duplicate question id in catalog: {0}")]
    DuplicateQuestion(String),

    #[error("question catalog is empty")]
    EmptyCatalog,

    #[error("axis '{0}' has no items in the catalog")]
    EmptyAxis(&'static str),

    #[error("invalid type code {0:?}: expected exactly 4 alphanumeric characters")]
    InvalidTypeCode(String),

    #[error("consistency pair references unknown question id: {0}")]
    UnknownPairItem(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
