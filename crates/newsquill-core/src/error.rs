use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsquillError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}
