use thiserror::Error;

/// Flash text shown when the server gave no usable message.
pub const SERVER_ERROR: &str = "Server error!";

/// Errors that can occur while talking to the orders service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Server responded {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },
    #[error("Could not encode request body: {0}")]
    Encode(String),
    #[error("Malformed response body: {0}")]
    Decode(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ApiError {
    /// The structured `message` the server attached to an error response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to put in a flash field for this failure.
    pub fn flash_text(&self) -> String {
        self.server_message().unwrap_or(SERVER_ERROR).to_string()
    }
}

/// Errors raised while loading startup configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors raised while parsing a console command line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConsoleError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),
    #[error("Unknown button: {0}")]
    UnknownButton(String),
    #[error("Unknown query option: {0}")]
    UnknownQueryOption(String),
    #[error("Input is not valid UTF-8")]
    InvalidEncoding,
}
