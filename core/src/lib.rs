//! MORPH Core Types
//!
//! This crate provides the foundational types used throughout MORPH:
//! - Value types (the Value enum covering every JSON shape)
//! - Records (the top-level mapping a script mutates)
//! - JSON conversion for inbound payloads and outbound envelopes
//! - Well-known field names
//! - Common error types

mod error;
mod json;
pub mod messages;
mod value;

pub use error::*;
pub use json::*;
pub use value::*;
