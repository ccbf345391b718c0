//! Error types for pointer parsing and resolution.

use thiserror::Error;

/// Error produced when constructing a [`JsonPointer`](crate::JsonPointer)
/// from a malformed string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The pointer is non-empty but does not begin with `/` (or `#` in
    /// fragment form).
    #[error("JSON pointer must be empty, start with a \"/\" or a \"#\"")]
    InvalidStart,
}

/// Error produced while traversing a document with a pointer.
///
/// Every variant carries the literal failing token (or index) so callers can
/// produce precise diagnostics. Resolution errors are terminal for the call:
/// there is no partial result and the document is left unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// An object traversal step found no matching key.
    #[error("object has no key '{0}'")]
    NoSuchKey(String),

    /// An array traversal step's token is not a non-negative base-10 integer.
    #[error("invalid array index '{0}'")]
    InvalidIndex(String),

    /// An array traversal step's index falls outside `[0, length)`.
    /// Index first, length second.
    #[error("index {index} out of bounds of array of length {length}")]
    IndexOutOfBounds {
        /// The parsed index token.
        index: usize,
        /// The length of the array at that step.
        length: usize,
    },

    /// A traversal step expected an object or array but found a scalar.
    #[error("cannot traverse scalar value at token '{0}'")]
    NotTraversable(String),
}
