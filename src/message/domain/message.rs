//! The timestamped text message stored by a [`MessageCollection`].
//!
//! Messages are immutable after creation. The `with_*` helpers return a new
//! message with one field replaced and leave the original untouched.
//!
//! [`MessageCollection`]: crate::message::collection::MessageCollection

use super::Timestamp;
use crate::message::error::MessageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A text message sent by a named sender at a given timestamp.
///
/// # Invariants
///
/// - `timestamp` is never negative (enforced by [`Timestamp`])
/// - Messages cannot be modified after creation
///
/// Equality is structural: two messages are equal when sender, text, and
/// timestamp all match exactly.
///
/// # Examples
///
/// ```
/// use message_log::message::domain::Message;
///
/// let message = Message::new("alice", "hello", 42).expect("valid message");
///
/// assert_eq!(message.sender(), "alice");
/// assert_eq!(message.render(), "alice: hello (sent at 42)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Who sent the message. Not required to be unique.
    sender: String,

    /// The body of the message.
    text: String,

    /// When the message was sent.
    timestamp: Timestamp,
}

impl Message {
    /// Creates a message from a signed timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::NegativeTimestamp`] if `timestamp` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use message_log::message::domain::Message;
    /// use message_log::message::error::MessageError;
    ///
    /// assert!(Message::new("bob", "hi", 0).is_ok());
    /// assert_eq!(
    ///     Message::new("bob", "hi", -1),
    ///     Err(MessageError::NegativeTimestamp(-1)),
    /// );
    /// ```
    pub fn new(
        sender: impl Into<String>,
        text: impl Into<String>,
        timestamp: i64,
    ) -> Result<Self, MessageError> {
        let validated = Timestamp::try_from(timestamp)?;
        Ok(Self::from_parts(sender, text, validated))
    }

    /// Creates a message from an already validated [`Timestamp`].
    #[must_use]
    pub fn from_parts(
        sender: impl Into<String>,
        text: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            timestamp,
        }
    }

    /// Returns the sender.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the send timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Renders the message as `"<sender>: <text> (sent at <timestamp>)"`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if both messages were sent at the same timestamp.
    #[must_use]
    pub fn same_time(&self, other: &Self) -> bool {
        self.sent_at(other.timestamp)
    }

    /// Returns `true` if this message was sent strictly before `other`.
    #[must_use]
    pub fn before(&self, other: &Self) -> bool {
        self.sent_before(other.timestamp)
    }

    /// Returns `true` if this message was sent strictly after `other`.
    #[must_use]
    pub fn after(&self, other: &Self) -> bool {
        self.sent_after(other.timestamp)
    }

    /// Returns `true` if this message was sent at exactly `timestamp`.
    #[must_use]
    pub fn sent_at(&self, timestamp: Timestamp) -> bool {
        self.timestamp == timestamp
    }

    /// Returns `true` if this message was sent strictly before `timestamp`.
    #[must_use]
    pub fn sent_before(&self, timestamp: Timestamp) -> bool {
        self.timestamp < timestamp
    }

    /// Returns `true` if this message was sent strictly after `timestamp`.
    #[must_use]
    pub fn sent_after(&self, timestamp: Timestamp) -> bool {
        self.timestamp > timestamp
    }

    /// Returns a copy of this message with a different sender.
    #[must_use]
    pub fn with_sender(&self, sender: impl Into<String>) -> Self {
        Self::from_parts(sender, self.text.clone(), self.timestamp)
    }

    /// Returns a copy of this message with different text.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::from_parts(self.sender.clone(), text, self.timestamp)
    }

    /// Returns a copy of this message with a different timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::NegativeTimestamp`] if `timestamp` is negative.
    pub fn with_timestamp(&self, timestamp: i64) -> Result<Self, MessageError> {
        let validated = Timestamp::try_from(timestamp)?;
        Ok(Self::from_parts(self.sender.clone(), self.text.clone(), validated))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (sent at {})", self.sender, self.text, self.timestamp)
    }
}
