use thiserror::Error;

/// Raised by the authorizer for any token it does not recognize.
///
/// The managed gateway matches on the error message, so `Display` must stay
/// exactly `Unauthorized` for the caller to receive a 401.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unauthorized")]
pub struct UnauthorizedError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
