use thiserror::Error;

/// Errors returned when decoding a cheer message datagram.
///
/// Every variant is locally recoverable: a listener logs the error and drops
/// the offending datagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("message too short: need at least {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("bad opcode: expected {expected}, got {actual}")]
    BadOpcode { expected: u8, actual: u8 },
    #[error("caption length truncated: continuation bit still set at byte {offset}")]
    TruncatedLength { offset: usize },
    #[error("caption length mismatch: declared {declared} bytes, got {actual}")]
    LengthMismatch { declared: usize, actual: usize },
}
