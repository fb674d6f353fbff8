//! An ordered, in-memory collection of messages.
//!
//! [`MessageCollection`] keeps its messages sorted by ascending timestamp.
//! Messages sharing a timestamp stay in the order they were inserted, so a
//! newly inserted message always lands after every existing message with the
//! same timestamp.
//!
//! Every filtered operation exists in two forms: a named convenience method
//! (`count_by_sender`, `render_by_range`, ...) and a general method taking a
//! [`MessageFilter`].

mod config;

pub use config::CollectionConfig;

use crate::message::{
    domain::{Message, MessageFilter, Timestamp},
    error::CollectionError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A collection of messages ordered by timestamp.
///
/// # Invariants
///
/// - For any positions `i < j`, `at(i).timestamp() <= at(j).timestamp()`
/// - Messages with equal timestamps keep their relative insertion order
/// - The collection owns its messages; clones and merges copy them
///
/// # Examples
///
/// ```
/// use message_log::message::collection::MessageCollection;
/// use message_log::message::domain::Message;
///
/// let mut collection = MessageCollection::new();
/// collection.insert(Message::new("User2", "Message2", 2).expect("valid message"));
/// collection.insert(Message::new("User1", "Message1", 1).expect("valid message"));
///
/// assert_eq!(
///     collection.render_all(),
///     "User1: Message1 (sent at 1)\nUser2: Message2 (sent at 2)\n",
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Message>", into = "Vec<Message>")]
pub struct MessageCollection {
    messages: Vec<Message>,
}

impl MessageCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Creates an empty collection using the given configuration.
    #[must_use]
    pub fn with_config(config: CollectionConfig) -> Self {
        Self {
            messages: Vec::with_capacity(config.initial_capacity),
        }
    }

    /// Returns `true` if the collection holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns the number of messages the collection can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.messages.capacity()
    }

    /// Returns the message at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&Message, CollectionError> {
        self.messages.get(index).ok_or_else(|| {
            trace!(index, len = self.len(), "message lookup out of range");
            CollectionError::index_out_of_range(index, self.len())
        })
    }

    /// Returns the message at zero-based `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    /// Returns the earliest message.
    #[must_use]
    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }

    /// Returns the latest message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns a read-only view of the messages in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Iterates over the messages in timestamp order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Iterates over the messages selected by `filter`, in timestamp order.
    pub fn matching<'a>(
        &'a self,
        filter: &'a MessageFilter<'a>,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |message| filter.matches(message))
    }

    /// Returns `true` if any message was sent at exactly `timestamp`.
    #[must_use]
    pub fn contains_timestamp(&self, timestamp: Timestamp) -> bool {
        self.matching(&MessageFilter::At(timestamp)).next().is_some()
    }

    /// Counts the messages selected by `filter`.
    #[must_use]
    pub fn count_matching(&self, filter: &MessageFilter<'_>) -> usize {
        self.matching(filter).count()
    }

    /// Counts the messages from `sender` (exact, case-sensitive match).
    #[must_use]
    pub fn count_by_sender(&self, sender: &str) -> usize {
        self.count_matching(&MessageFilter::Sender(sender))
    }

    /// Renders the messages selected by `filter`, each followed by `'\n'`.
    ///
    /// Returns an empty string when nothing matches.
    #[must_use]
    pub fn render_matching(&self, filter: &MessageFilter<'_>) -> String {
        self.matching(filter)
            .map(|message| format!("{message}\n"))
            .collect()
    }

    /// Renders every message.
    #[must_use]
    pub fn render_all(&self) -> String {
        self.render_matching(&MessageFilter::All)
    }

    /// Renders the messages from `sender`.
    #[must_use]
    pub fn render_by_sender(&self, sender: &str) -> String {
        self.render_matching(&MessageFilter::Sender(sender))
    }

    /// Renders the messages sent at exactly `timestamp`.
    #[must_use]
    pub fn render_by_timestamp(&self, timestamp: Timestamp) -> String {
        self.render_matching(&MessageFilter::At(timestamp))
    }

    /// Renders the messages sent between `first` and `second` inclusive.
    /// The bounds may be given in either order.
    #[must_use]
    pub fn render_by_range(&self, first: Timestamp, second: Timestamp) -> String {
        self.render_matching(&MessageFilter::between(first, second))
    }

    /// Inserts `message` after every message with a timestamp less than or
    /// equal to its own and returns the position it landed at.
    pub fn insert(&mut self, message: Message) -> usize {
        let timestamp = message.timestamp();
        let index = self
            .messages
            .partition_point(|existing| existing.timestamp() <= timestamp);
        self.messages.insert(index, message);
        debug!(index, %timestamp, len = self.len(), "inserted message");
        index
    }

    /// Removes the messages selected by `filter` and returns how many were
    /// removed. Survivors keep their relative order.
    pub fn delete_matching(&mut self, filter: &MessageFilter<'_>) -> usize {
        let before = self.messages.len();
        self.messages.retain(|message| !filter.matches(message));
        let removed = before.saturating_sub(self.messages.len());
        debug!(removed, ?filter, "deleted messages");
        removed
    }

    /// Removes every message and returns how many were removed.
    pub fn delete_all(&mut self) -> usize {
        let removed = self.messages.len();
        self.messages.clear();
        debug!(removed, "cleared collection");
        removed
    }

    /// Removes the messages from `sender`.
    pub fn delete_by_sender(&mut self, sender: &str) -> usize {
        self.delete_matching(&MessageFilter::Sender(sender))
    }

    /// Removes the messages sent strictly before `timestamp`.
    pub fn delete_before_timestamp(&mut self, timestamp: Timestamp) -> usize {
        self.delete_matching(&MessageFilter::Before(timestamp))
    }

    /// Removes the messages sent between `first` and `second` inclusive.
    /// The bounds may be given in either order.
    pub fn delete_by_range(&mut self, first: Timestamp, second: Timestamp) -> usize {
        self.delete_matching(&MessageFilter::between(first, second))
    }

    /// Inserts a copy of every message in `other`, in `other`'s order, using
    /// the same rule as [`insert`](Self::insert). `other` is left unchanged.
    ///
    /// Incoming messages land after existing messages with the same
    /// timestamp, and keep their own relative order.
    pub fn merge(&mut self, other: &Self) {
        self.messages.reserve(other.len());
        for message in other {
            self.insert(message.clone());
        }
        debug!(merged = other.len(), len = self.len(), "merged collection");
    }
}

impl PartialEq for MessageCollection {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.messages == other.messages
    }
}

impl Eq for MessageCollection {}

impl fmt::Display for MessageCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

impl Extend<Message> for MessageCollection {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        for message in iter {
            self.insert(message);
        }
    }
}

impl FromIterator<Message> for MessageCollection {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl From<Vec<Message>> for MessageCollection {
    fn from(messages: Vec<Message>) -> Self {
        messages.into_iter().collect()
    }
}

impl From<MessageCollection> for Vec<Message> {
    fn from(collection: MessageCollection) -> Self {
        collection.messages
    }
}

impl IntoIterator for MessageCollection {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageCollection {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
