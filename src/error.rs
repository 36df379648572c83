//! Idunn error types

/// Idunn error types
#[derive(Debug, thiserror::Error)]
pub enum IdunnError {
    // Validation errors, caught before any network activity
    #[error("no file selected")]
    NoFileSelected,

    // Upload errors
    #[error("failed to read upload: {0}")]
    Upload(String),

    // Service/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl IdunnError {
    /// Whether this error was raised by local validation rather than by a
    /// request attempt. Validation errors never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, IdunnError::NoFileSelected)
    }
}

/// Result type alias for idunn operations
pub type Result<T> = std::result::Result<T, IdunnError>;
