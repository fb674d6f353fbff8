//! Construction settings for [`MessageCollection`](super::MessageCollection).

/// Configuration applied when a collection is created.
///
/// # Examples
///
/// ```
/// use message_log::message::collection::{CollectionConfig, MessageCollection};
///
/// let config = CollectionConfig::default();
/// assert_eq!(config.initial_capacity, 0);
///
/// let collection = MessageCollection::with_config(CollectionConfig::with_capacity(64));
/// assert!(collection.capacity() >= 64);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Number of messages to reserve space for up front.
    pub initial_capacity: usize,
}

impl CollectionConfig {
    /// Creates a configuration that reserves room for `initial_capacity`
    /// messages.
    #[must_use]
    pub const fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}
