//! Errors reported by [`Deque`](crate::Deque).

use std::fmt;

/// The deque operation that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`Deque::rem_beg`](crate::Deque::rem_beg)
    RemBeg,
    /// [`Deque::rem_end`](crate::Deque::rem_end)
    RemEnd,
    /// [`Deque::peek_beg`](crate::Deque::peek_beg)
    PeekBeg,
    /// [`Deque::peek_end`](crate::Deque::peek_end)
    PeekEnd,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::RemBeg => "rem_beg",
            Operation::RemEnd => "rem_end",
            Operation::PeekBeg => "peek_beg",
            Operation::PeekEnd => "peek_end",
        };
        f.write_str(name)
    }
}

/// Error type for deque operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// A read or removal was attempted while the deque held no elements.
    #[error("invalid operation on empty container: {op}")]
    Empty {
        /// The call that failed.
        op: Operation,
    },
}

impl DequeError {
    /// The operation that triggered this error.
    pub fn op(&self) -> Operation {
        match self {
            DequeError::Empty { op } => *op,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DequeError>;
