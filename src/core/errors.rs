use thiserror::Error;

pub const NO_CONNECTION_MESSAGE: &str =
    "Unable to connect to server. Please ensure you have an internet connection";
pub const NO_RESPONSE_MESSAGE: &str = "Server refused to respond";

#[derive(Error, Debug)]
pub enum KudaError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid response (status {status_code}): {message}")]
    InvalidResponse { status_code: u16, message: String },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

impl KudaError {
    /// Whether re-sending the same call later may succeed without caller intervention.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidResponse { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
