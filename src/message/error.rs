//! Error types for message construction and collection access.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use thiserror::Error;

/// Broad classification shared by every error in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied value violated a precondition.
    InvalidArgument,
    /// A position fell outside the bounds of a collection.
    IndexOutOfRange,
}

/// Errors that can occur when creating or modifying a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The timestamp was negative.
    #[error("timestamp must not be negative, got {0}")]
    NegativeTimestamp(i64),
}

impl MessageError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeTimestamp(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Errors that can occur when reading from a message collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The requested position does not hold a message.
    #[error("index {index} is out of range for a collection of {len} messages")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of messages in the collection.
        len: usize,
    },
}

impl CollectionError {
    /// Creates an out-of-range error.
    #[must_use]
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}
