use thiserror::Error;

/// Failure of a single outbound provider call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid JSON response")]
    InvalidResponse,

    #[error("{0}")]
    Transport(String),

    #[error("Request timeout")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchError::Timeout;
        }

        // The request URL carries the credential in its query string.
        let err = err.without_url();

        // reqwest's Display hides the underlying io/tls cause, so walk the chain.
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::Transport(message)
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Missing required parameters: domain, type, and apiKey")]
    MissingParameters,

    #[error("Type must be either \"domain\" or \"contact\"")]
    InvalidKind { value: String },

    #[error("{message}")]
    Provider { message: String },

    #[error("Failed to lookup domain information: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Provider,
    Transport,
    Timeout,
    MalformedResponse,
    Configuration,
}

/// Whether the caller can fix the request or should consider retrying later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Client,
    Server,
}

impl FailureClass {
    pub fn status_code(&self) -> u16 {
        match self {
            FailureClass::Client => 400,
            FailureClass::Server => 500,
        }
    }
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::MissingParameters | LookupError::InvalidKind { .. } => {
                ErrorCategory::Validation
            }
            LookupError::Provider { .. } => ErrorCategory::Provider,
            LookupError::Fetch(FetchError::Transport(_)) => ErrorCategory::Transport,
            LookupError::Fetch(FetchError::Timeout) => ErrorCategory::Timeout,
            LookupError::Fetch(FetchError::InvalidResponse) => ErrorCategory::MalformedResponse,
            LookupError::ConfigError { .. }
            | LookupError::InvalidConfigValueError { .. }
            | LookupError::IoError(_)
            | LookupError::TomlError(_) => ErrorCategory::Configuration,
        }
    }

    pub fn failure_class(&self) -> FailureClass {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Provider => FailureClass::Client,
            _ => FailureClass::Server,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.failure_class().status_code()
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
