use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid dial code: {0:?}")]
    InvalidDialCode(String),
    #[error("invalid trunk prefix: {0:?}")]
    InvalidTrunkPrefix(char),
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}
