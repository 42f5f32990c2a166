use thiserror::Error;

/// Errors that can occur while extracting, normalizing or exporting a listing
#[derive(Debug, Error)]
pub enum ListingError {
    /// No API key was configured for the generation service
    #[error("No API key configured (set API_KEY or GEMINI_API_KEY)")]
    MissingApiKey,

    /// The listing URL is empty or cannot be parsed
    #[error("Invalid listing URL: {0}")]
    InvalidUrl(String),

    /// Transport failure talking to the generation service
    #[error("Network error: {0}")]
    Network(String),

    /// The generation service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The generation service returned no text
    #[error("Failed to extract vehicle data: empty response")]
    EmptyResponse,

    /// The generation service returned text that is not a vehicle record
    #[error("Failed to parse vehicle data: {0}")]
    MalformedOutput(String),

    /// Reading or writing a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ListingError {
    /// Whether this error came out of the extraction call (as opposed to local I/O)
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            ListingError::MissingApiKey
                | ListingError::Network(_)
                | ListingError::Api { .. }
                | ListingError::EmptyResponse
                | ListingError::MalformedOutput(_)
        )
    }
}

/// Result type alias for listing operations
pub type Result<T> = std::result::Result<T, ListingError>;
