#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("System call error: {0}")]
    System(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Feature not available: {0}")]
    NotAvailable(String),

    #[error("Invalid argument: {context} (got {value})")]
    InvalidArgument { context: String, value: String },

    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

impl Error {
    pub(crate) fn system<S: Into<String>>(msg: S) -> Self {
        Error::System(msg.into())
    }

    pub(crate) fn invalid_data<S: Into<String>>(msg: S) -> Self {
        Error::InvalidData(msg.into())
    }

    pub(crate) fn not_available<S: Into<String>>(msg: S) -> Self {
        Error::NotAvailable(msg.into())
    }

    pub(crate) fn invalid_argument<C: Into<String>, V: ToString>(context: C, value: V) -> Self {
        Error::InvalidArgument { context: context.into(), value: value.to_string() }
    }

    pub(crate) fn delivery<S: Into<String>>(msg: S) -> Self {
        Error::Delivery(msg.into())
    }
}

/// Result type for darwin-memwatch operations
pub type Result<T> = std::result::Result<T, Error>;
