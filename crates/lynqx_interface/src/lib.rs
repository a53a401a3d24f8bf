//! Trait definitions for LynQX generation providers.
//!
//! The review workflow treats scenario generation as an opaque capability:
//! a prompt goes in, free-form text comes out. [`LynqxDriver`] is that
//! boundary; provider clients implement it and tests substitute mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::LynqxDriver;
