use thiserror::Error;

/// Failure reported by a sender.
///
/// The message is carried verbatim so callers can compare errors by value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Send(String),
}

impl Error {
    pub fn send(msg: impl Into<String>) -> Self {
        Self::Send(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
