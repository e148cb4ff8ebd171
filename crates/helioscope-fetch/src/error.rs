//! Error types for fetching and archiving
//!
//! Per-source failures are classified, never propagated past the fallback
//! boundary: the fetch loop records the reason and advances to the next
//! source. Only total exhaustion surfaces to the caller.

/// Fetch failures
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP client could not be constructed at startup
    #[error("http client construction failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Network or timeout failure talking to a source
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Source answered with a non-success status
    #[error("unexpected http status {status}")]
    Http {
        /// Response status code
        status: reqwest::StatusCode,
    },

    /// Payload could not be decoded as an image
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// Payload sniffed as a format outside JPEG/PNG
    #[error("unsupported payload format: {0}")]
    UnsupportedPayload(String),

    /// Decoded image holds no pixels
    #[error("no valid image data")]
    EmptyImage,

    /// Every source in the table failed this cycle
    #[error("all {} sources exhausted", failures.len())]
    Exhausted {
        /// One record per source, in fallback order
        failures: Vec<SourceFailure>,
    },
}

impl FetchError {
    /// Whether this is the total-exhaustion signal
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Why one source was skipped during a fetch cycle
#[derive(Debug)]
pub struct SourceFailure {
    /// Source name
    pub source: String,
    /// Classified failure
    pub reason: FetchError,
}

/// Photo archive failures
///
/// Archive errors are logged at the fetch boundary and never fail a fetch.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// Directory creation or file write failed
    #[error("archive io error: {0}")]
    Io(#[from] std::io::Error),

    /// JPEG re-encode failed
    #[error("jpeg encode failed: {0}")]
    Encode(#[from] image::ImageError),
}
