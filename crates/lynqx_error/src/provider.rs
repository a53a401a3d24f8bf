//! Generation provider error types.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Transport failure (DNS, connection refused, TLS)
    #[display("Request to provider failed: {}", _0)]
    Http(String),
    /// The request did not complete within the configured timeout
    #[display("Provider request timed out after {} seconds", _0)]
    Timeout(u64),
    /// The provider answered with a non-success status
    #[display("Provider returned HTTP {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },
    /// The response body could not be decoded
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
    /// The provider answered without any text
    #[display("Provider returned an empty response")]
    EmptyResponse,
    /// The model declined to answer
    #[display("Provider declined the request: {}", _0)]
    Refused(String),
    /// The request could not be built from the prompt
    #[display("Failed to build provider request: {}", _0)]
    Request(String),
}

impl ProviderErrorKind {
    /// Whether retrying the same action later is likely to succeed.
    ///
    /// Timeouts, transport failures, rate limits (429) and server-side
    /// failures (5xx, 408) are transient. Authentication and malformed
    /// request errors are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderErrorKind::Http(_) | ProviderErrorKind::Timeout(_) => true,
            ProviderErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use lynqx_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Api {
///     status: 429,
///     message: "rate limited".to_string(),
/// });
/// assert!(err.kind.is_transient());
/// assert!(format!("{}", err).contains("HTTP 429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
