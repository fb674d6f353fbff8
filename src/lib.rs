//! Message log: an ordered, in-memory collection of timestamped messages.
//!
//! This crate stores text messages sorted by the time they were sent and
//! supports lookup, filtered rendering, deletion, cloning, and merging.
//!
//! # Modules
//!
//! - [`message`]: Message value type, timestamp ordering, and the collection.

pub mod message;
