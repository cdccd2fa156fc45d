//! Cart errors
//!
//! Failures below the business layer. A `success: false` reply is not an
//! error here; it is a `CartOutcome::Rejected`.

use thiserror::Error;

pub type CartResult<T> = Result<T, CartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Request could not be built or sent
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for CartError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => CartError::Decode(e.to_string()),
            other => CartError::Transport(other.to_string()),
        }
    }
}
