//! Usage errors.
//!
//! Stencil has no recoverable errors. Anything listed here means the UI
//! declaration code is structurally wrong for the current frame (an
//! unmatched `begin`/`end`, a pop without a push, more nesting than the fixed
//! stacks allow), so the engine reports it through [`fatal`] and panics.
//! Conditions the engine can absorb (pool eviction, popups that are not open,
//! hash collisions) never show up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("{stack} stack is not empty at end of frame ({depth} entries left); unmatched push/begin")]
    Unbalanced { stack: &'static str, depth: usize },

    #[error("pop from empty {stack} stack")]
    PopEmpty { stack: &'static str },

    #[error("{stack} stack overflow (capacity {capacity})")]
    Overflow {
        stack: &'static str,
        capacity: usize,
    },

    #[error("no current {what}; call this between the matching begin/end pair")]
    Missing { what: &'static str },

    #[error("text input overflow: {len} bytes buffered, capacity is {capacity}")]
    TextOverflow { len: usize, capacity: usize },

    #[error("layout row has {items} widths, at most {max} are supported")]
    TooManyWidths { items: usize, max: usize },

    #[error("begin() called while a frame is already in progress")]
    NestedFrame,

    #[error("end() called without a matching begin()")]
    NotInFrame,
}

/// Reports a violated usage invariant and aborts the frame by panicking.
#[track_caller]
pub fn fatal(err: UsageError) -> ! {
    log::error!("stencil usage error: {err}");
    panic!("stencil usage error: {err}")
}
