use thiserror::Error;

/// Top-level error type for the ACME shell.
#[derive(Debug, Error)]
pub enum AcmeError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Locale catalog error (bad dictionary, missing fallback locale).
    #[error("locale error: {0}")]
    Locale(String),

    /// Route table error (invalid pattern, duplicate name, bad redirect).
    #[error("route error: {0}")]
    Route(String),

    /// A page component could not be resolved.
    #[error("component error: {0}")]
    Component(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
