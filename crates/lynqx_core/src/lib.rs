//! Core data types for the LynQX review workflow.
//!
//! This crate provides the plain data shared by the workflow, the provider
//! clients and the terminal front end. It holds no behaviour beyond small
//! conveniences on the types themselves.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod notice;
mod output;
mod request;
mod role;
mod scenario;
mod step;

pub use message::Message;
pub use notice::{Notice, NoticeLevel};
pub use output::{Output, Usage};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use scenario::{NewScenario, ScenarioRecord, ScenarioStatus, ScenarioType};
pub use step::Step;
