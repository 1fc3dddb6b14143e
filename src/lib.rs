//! netdeque: a generic double-ended queue
//!
//! [`Deque`] stores its elements in a ring buffer that doubles when full, so
//! insertion and removal at either end are amortized O(1) and never shift the
//! elements already stored. Reading or removing from an empty deque yields
//! [`DequeError::Empty`].
//!
//! The container has a single owner and does no internal synchronization;
//! wrap it in a lock to share it between threads.
#![warn(
    missing_debug_implementations,
    missing_docs,
    redundant_lifetimes,
    non_local_definitions,
    unsafe_code
)]

pub mod cirbuf;
pub mod constants;
pub mod deque;
pub mod error;

pub use deque::Deque;
pub use error::{DequeError, Operation, Result};
