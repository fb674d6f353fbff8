//! Predicates used to select messages from a collection.

use super::{Message, Timestamp, TimestampRange};

/// Selects which messages a search, count, render, or delete applies to.
///
/// # Examples
///
/// ```
/// use message_log::message::domain::{Message, MessageFilter, Timestamp};
///
/// let message = Message::new("alice", "hello", 7).expect("valid message");
///
/// assert!(MessageFilter::Sender("alice").matches(&message));
/// assert!(MessageFilter::Before(Timestamp::new(8)).matches(&message));
/// assert!(!MessageFilter::At(Timestamp::new(8)).matches(&message));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFilter<'a> {
    /// Every message.
    All,
    /// Messages whose sender equals the given name exactly (case-sensitive).
    Sender(&'a str),
    /// Messages sent at exactly the given timestamp.
    At(Timestamp),
    /// Messages sent strictly before the given timestamp.
    Before(Timestamp),
    /// Messages sent within the inclusive range.
    Within(TimestampRange),
}

impl MessageFilter<'_> {
    /// Creates a filter for the inclusive range between two bounds given in
    /// either order.
    #[must_use]
    pub fn between(first: Timestamp, second: Timestamp) -> Self {
        Self::Within(TimestampRange::new(first, second))
    }

    /// Returns `true` if `message` satisfies this filter.
    #[must_use]
    pub fn matches(&self, message: &Message) -> bool {
        match *self {
            Self::All => true,
            Self::Sender(sender) => message.sender() == sender,
            Self::At(timestamp) => message.sent_at(timestamp),
            Self::Before(timestamp) => message.sent_before(timestamp),
            Self::Within(range) => range.contains(message.timestamp()),
        }
    }
}
