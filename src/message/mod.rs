//! Timestamped messages and the ordered collection that holds them.
//!
//! # Layout
//!
//! - **Domain**: Immutable value types ([`domain::Message`], [`domain::Timestamp`], [`domain::MessageFilter`])
//! - **Collection**: The sorted container ([`collection::MessageCollection`])
//! - **Errors**: Typed failures for invalid input ([`error::MessageError`], [`error::CollectionError`])
//!
//! # Example
//!
//! ```
//! use message_log::message::collection::MessageCollection;
//! use message_log::message::domain::{Message, Timestamp};
//!
//! let mut collection = MessageCollection::new();
//! collection.insert(Message::new("user1", "first", 5).expect("valid message"));
//! let index = collection.insert(Message::new("user2", "second", 5).expect("valid message"));
//!
//! assert_eq!(index, 1);
//! assert!(collection.contains_timestamp(Timestamp::new(5)));
//! assert_eq!(collection.count_by_sender("user1"), 1);
//! ```

pub mod collection;
pub mod domain;
pub mod error;

#[cfg(test)]
mod tests;
