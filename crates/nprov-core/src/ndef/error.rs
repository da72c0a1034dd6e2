//! NDEF parse/build error type.

use thiserror::Error;

/// Errors from building or parsing NDEF messages.
///
/// Kept as distinct variants so callers (and tests) can tell the
/// zero-record case apart from plain truncation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NdefError {
    #[error("message contains no records")]
    EmptyMessage,

    #[error("message truncated at byte {offset}")]
    Truncated { offset: usize },

    #[error("reserved TNF value {0:#04x}")]
    InvalidTnf(u8),

    #[error("chunked records are not supported")]
    ChunkedRecord,

    #[error("message ended without a message-end record")]
    MissingMessageEnd,

    #[error("{0} trailing bytes after message end")]
    TrailingBytes(usize),
}
