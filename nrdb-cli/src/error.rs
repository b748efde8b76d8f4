use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Dataset loading or cache error
    #[error(transparent)]
    Data(#[from] nrdb_data::DataError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Delivering a message to its room failed
    #[error("Send to {room} failed: {message}")]
    Send { room: String, message: String },
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn send(room: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Send {
            room: room.into(),
            message: message.into(),
        }
    }
}
