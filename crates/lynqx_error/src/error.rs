//! Top-level error wrapper types.

use crate::{ConfigError, IoError, JsonError, ProviderError, ValidationError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every error a LynQX crate can produce.
///
/// # Examples
///
/// ```
/// use lynqx_error::{LynqxError, LynqxErrorKind, ConfigError};
///
/// let err: LynqxError = ConfigError::new("missing credential").into();
/// assert!(matches!(err.kind(), LynqxErrorKind::Config(_)));
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LynqxErrorKind {
    /// Configuration error (fatal at startup)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generation provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Validation error (inline warning)
    #[from(ValidationError)]
    Validation(ValidationError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// File I/O error
    #[from(IoError)]
    Io(IoError),
    /// Terminal UI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// LynQX error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("LynQX Error: {}", _0)]
pub struct LynqxError(Box<LynqxErrorKind>);

impl LynqxError {
    /// Create a new error from a kind.
    pub fn new(kind: LynqxErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LynqxErrorKind {
        &self.0
    }

    /// Message suitable for an inline notice, without location details.
    pub fn user_message(&self) -> String {
        match self.kind() {
            LynqxErrorKind::Config(e) => e.message.clone(),
            LynqxErrorKind::Provider(e) => e.kind.to_string(),
            LynqxErrorKind::Validation(e) => e.kind().to_string(),
            LynqxErrorKind::Json(e) => e.message.clone(),
            LynqxErrorKind::Io(e) => e.message.clone(),
            #[cfg(feature = "tui")]
            LynqxErrorKind::Tui(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to LynqxErrorKind
impl<T> From<T> for LynqxError
where
    T: Into<LynqxErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for LynQX operations.
pub type LynqxResult<T> = std::result::Result<T, LynqxError>;
