use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or validating a graph instance.
///
/// Search itself is infallible once a [`crate::Graph`] exists; everything
/// that can go wrong happens at the input boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The instance header is unusable: missing, unparsable, or carrying a
    /// non-positive vertex count.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O failure while reading an instance file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds an [`Error::InvalidInput`] from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
