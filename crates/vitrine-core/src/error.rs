//! Error types for the Vitrine core library.

/// Errors that can occur during a Vitrine run.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// External fetch error (price API, GraphQL API failures, malformed
    /// payloads, etc.)
    #[error("Fetch error: {message}")]
    Fetch {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// LLM provider error (API failures, rate limits, empty responses)
    #[error("LLM error: {message}")]
    Llm {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The LLM produced text that fails the summary acceptance rules
    #[error("Summary rejected: {reason}")]
    SummaryRejected {
        /// Which acceptance rule the summary failed
        reason: String,
    },

    /// Template references a placeholder with no supplied value
    #[error("Missing value for placeholder: {token}")]
    MissingValue {
        /// The unmapped placeholder token
        token: String,
    },

    /// Configuration error (missing or malformed environment settings)
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Vitrine operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Retryable errors are transient failures of an external call: rate
    /// limits, network hiccups, temporary service unavailability. Rendering,
    /// configuration, and acceptance failures are permanent for the run.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Fetch { .. } => true,
            Error::Llm { .. } => true,
            Error::Io(_) => true,
            Error::SummaryRejected { .. } => false,
            Error::MissingValue { .. } => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a new fetch error with a message.
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Error::Fetch {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new fetch error with a message and source error.
    pub fn fetch_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Fetch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new LLM error with a message.
    pub fn llm<S: Into<String>>(message: S) -> Self {
        Error::Llm {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new LLM error with a message and source error.
    pub fn llm_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Llm {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new summary rejection error.
    pub fn summary_rejected<S: Into<String>>(reason: S) -> Self {
        Error::SummaryRejected {
            reason: reason.into(),
        }
    }

    /// Creates a new missing-value error naming the unmapped token.
    pub fn missing_value<S: Into<String>>(token: S) -> Self {
        Error::MissingValue {
            token: token.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
