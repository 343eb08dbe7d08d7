//! Resumable cursors over in-memory byte buffers.
//!
//! [`BitCursor`] hands out successive runs of bits from a fixed buffer,
//! optionally repacking byte-aligned runs into whole bytes. [`ByteCursor`]
//! is the coarser sibling which slices whole bytes without bit-level
//! granularity. Both hold their place between calls, so a consumer can
//! pull a 16-bit field, then a 4-bit flag, then more bytes, one request
//! at a time.
//!
//! Bit order is "big" within each byte: the most significant bit of every
//! input byte is the first one handed out. Byte-aligned runs repacked
//! into bytes therefore reproduce the original input bytes exactly.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use thiserror::Error;

mod bytes;
pub use bytes::ByteCursor;

mod reader;
pub use reader::{BitCursor, Chunk};

/// Errors that may occur while requesting data from a cursor.
#[derive(Debug, Error)]
pub enum Error {
    /// More data was requested than the cursor has left, in a mode
    /// which does not permit silent truncation.
    #[error("requested {requested} with only {remaining} remaining in the buffer")]
    Exhausted {
        /// The number of units the caller asked for.
        requested: usize,
        /// The number of unread units the cursor still held.
        remaining: usize,
    },
}

/// Behavior of a cursor whose request exceeds the remaining content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExhaustionPolicy {
    /// Silently yield whatever remains, possibly nothing.
    #[default]
    Truncate,
    /// Reject the request with [`Error::Exhausted`], leaving the
    /// cursor untouched.
    Fail,
}

/// Configuration for a [`BitCursor`], fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct CursorOptions {
    /// Whether byte-aligned runs are repacked into whole bytes instead
    /// of a textual bit-string.
    pub convert_bytes: bool,
    /// How a request past the end of the buffer is handled.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            convert_bytes: true,
            exhaustion: ExhaustionPolicy::Truncate,
        }
    }
}
