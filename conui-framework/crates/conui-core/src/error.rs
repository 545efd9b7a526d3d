//! Error types for conui operations.

use thiserror::Error;

/// Core error type for conui operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An element id does not refer to a live element in the tree.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// The element is not a child of the given parent.
    #[error("element {child} is not a child of {parent}")]
    NotAChild {
        /// The parent that was searched.
        parent: String,
        /// The element that was expected among its children.
        child: String,
    },

    /// Attaching the child would make an element its own ancestor.
    #[error("circular reference detected")]
    CircularReference,

    /// An element kind was rendered that has no draw behavior.
    ///
    /// This is a programming error: the caller built a tree containing an
    /// element it never gave a way to draw itself.
    #[error("no draw behavior for element kind `{0}`")]
    UnimplementedBehavior(&'static str),

    /// An operation was applied to an element of the wrong kind.
    #[error("expected a {expected} element, found {found}")]
    WrongKind {
        /// The kind the operation needs.
        expected: &'static str,
        /// The kind the element has.
        found: &'static str,
    },
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}
