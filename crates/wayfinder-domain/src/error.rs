//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Wayfinder
///
/// Provider failures carry the provider name so the resolver can log a
/// warning that identifies which adapter fell through. Abstention (an
/// unconfigured provider or an unusable payload) is not an error at all;
/// adapters signal it with `Ok(None)`.
#[derive(Error, Debug)]
pub enum Error {
    /// Provider returned HTTP 429
    #[error("{provider} rate limit exceeded")]
    RateLimited {
        /// Name of the provider that throttled us
        provider: String,
    },

    /// Provider returned HTTP 401 or 403
    #[error("{provider} authentication failed: {message}")]
    AuthFailed {
        /// Name of the provider that rejected the credential
        provider: String,
        /// Response body or reason, for misconfiguration hints
        message: String,
    },

    /// Provider returned any other non-2xx status
    #[error("{provider} request failed ({status}): {message}")]
    Http {
        /// Name of the provider
        provider: String,
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Connection failure or request timeout
    #[error("{provider} network error: {message}")]
    Network {
        /// Name of the provider
        provider: String,
        /// Description of the transport failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Generic string-based error
    #[error("{0}")]
    String(String),
}

impl Error {
    /// Create a rate-limit error for a provider
    pub fn rate_limited<S: Into<String>>(provider: S) -> Self {
        Self::RateLimited {
            provider: provider.into(),
        }
    }

    /// Create an authentication error for a provider
    pub fn auth_failed<S: Into<String>, M: Into<String>>(provider: S, message: M) -> Self {
        Self::AuthFailed {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a generic HTTP error for a provider
    pub fn http<S: Into<String>, M: Into<String>>(provider: S, status: u16, message: M) -> Self {
        Self::Http {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    /// Create a network/timeout error for a provider
    pub fn network<S: Into<String>, M: Into<String>>(provider: S, message: M) -> Self {
        Self::Network {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
