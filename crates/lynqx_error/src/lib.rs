//! Error types for LynQX.
//!
//! This crate provides the error taxonomy shared by every LynQX crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three conditions a user can actually run into are:
//! - [`ConfigError`]: fatal at startup (missing credential, bad config file)
//! - [`ProviderError`]: the generation call failed; recoverable, retry allowed
//! - [`ValidationError`]: empty field, duplicate name, unmet navigation guard
//!
//! # Examples
//!
//! ```
//! use lynqx_error::{LynqxResult, ValidationError, ValidationErrorKind};
//!
//! fn submit(stories: &str) -> LynqxResult<()> {
//!     if stories.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptyStories))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(submit("   ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod io;
mod json;
mod provider;
#[cfg(feature = "tui")]
mod tui;
mod validation;

pub use config::ConfigError;
pub use error::{LynqxError, LynqxErrorKind, LynqxResult};
pub use io::IoError;
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use validation::{ValidationError, ValidationErrorKind};
