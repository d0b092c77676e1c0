//! Domain types for the message subsystem.
//!
//! This module contains plain value types with no infrastructure
//! dependencies. All types are immutable after construction.

mod error;
mod message;
mod severity;

pub use error::ParseSeverityError;
pub use message::Message;
pub use severity::Severity;
