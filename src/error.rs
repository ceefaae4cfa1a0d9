/*!
Error types used across the negotiation core.
*/
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::{error::Error as StdError, fmt, io};

/// Top-level error returned by a negotiation, the codec, and segment construction.
#[derive(Debug)]
pub enum Error {
    /// Stream read/write failure. `ErrorKind::UnexpectedEof` is routed to
    /// [`DecodeError::ShortBuffer`] instead, so this only ever carries a genuine I/O fault.
    Io(io::Error),
    /// Wire message failed to decode.
    Decode(DecodeError),
    /// A `Segment` constructor was called with data that violates a shape invariant
    /// (an empty interface/child list, or non-joinable composition children).
    InvariantViolation(String),
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Decode(e) => write!(f, "decode error: {e}"),
            Error::InvariantViolation(s) => write!(f, "invariant violation: {s}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Self {
        match io_error.kind() {
            ErrorKind::UnexpectedEof => Error::Decode(DecodeError::ShortBuffer),
            _ => Error::Io(io_error),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

/// Errors specific to parsing a wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes were available than the header or a segment record required.
    ShortBuffer,
    /// A Composition child index pointed at or past its own position in `(oldsegs ++ newsegs)`.
    ForwardReference,
    /// A segment record's reserved flag bits (2..7) were non-zero.
    BadFlags,
    /// `msgLen`, `hdrLen`, or a `seglen` fell outside the policy range.
    SizeLimit,
    /// A segment record declared `seglen == 0`.
    SegLenZero,
    /// The body ended before `numSegs` records were read, or left trailing bytes.
    NumSegsMismatch,
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::ShortBuffer => write!(f, "buffer ended before a complete field"),
            DecodeError::ForwardReference => write!(f, "composition child referenced a non-prior index"),
            DecodeError::BadFlags => write!(f, "reserved flag bits were set"),
            DecodeError::SizeLimit => write!(f, "msgLen, hdrLen, or seglen exceeded the policy range"),
            DecodeError::SegLenZero => write!(f, "segment record declared zero length"),
            DecodeError::NumSegsMismatch => write!(f, "segment body did not exactly match numSegs"),
        }
    }
}

impl StdError for DecodeError {}
