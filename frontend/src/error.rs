use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the write: {0}")]
    Rejected(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme value {0:?}")]
pub struct ThemeParseError(pub String);
