//! Domain types for the message subsystem.
//!
//! This module contains pure value types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod filter;
mod message;
mod timestamp;

pub use filter::MessageFilter;
pub use message::Message;
pub use timestamp::{Timestamp, TimestampRange};
