//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Command execution errors. The `Display` text is what users see in chat.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command.")]
    UnknownCommand { name: String },

    #[error("Invalid arguments for `{command}`: {reason}")]
    ArgumentMismatch { command: String, reason: String },

    #[error("{0}")]
    HandlerFailure(String),
}

impl CommandError {
    pub fn failed(reason: impl Into<String>) -> Self {
        CommandError::HandlerFailure(reason.into())
    }
}

impl From<GatewayError> for CommandError {
    fn from(err: GatewayError) -> Self {
        CommandError::HandlerFailure(err.to_string())
    }
}

/// Startup errors raised while commands are registered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Command `{0}` is already registered")]
    Duplicate(String),

    #[error("Invalid signature for `{name}`: {reason}")]
    InvalidSignature { name: String, reason: String },
}

/// Errors from a chat platform connection
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to send message: {0}")]
    Send(String),

    #[error("Connection closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
