//! Decoder error taxonomy.

use std::os::raw::c_int;
use thiserror::Error;

use crate::ffi;

/// Errors returned by Opus decoder operations.
///
/// Each variant corresponds to one libopus status code; [`Error::raw`]
/// recovers the native code, so interop with the documented engine
/// codes stays verifiable. Codes outside the fixed set fall back to
/// [`Error::Unknown`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// One or more invalid or out-of-range arguments.
    #[error("opus: bad argument")]
    BadArg,

    /// Not enough bytes allocated in the buffer.
    #[error("opus: buffer too small")]
    BufferTooSmall,

    /// An internal error was detected.
    #[error("opus: internal error")]
    InternalError,

    /// The compressed data passed is corrupted.
    #[error("opus: invalid packet")]
    InvalidPacket,

    /// Invalid or unsupported request.
    #[error("opus: unimplemented")]
    Unimplemented,

    /// The decoder structure is invalid or already freed.
    #[error("opus: invalid state")]
    InvalidState,

    /// Memory allocation failed.
    #[error("opus: allocation failed")]
    AllocFail,

    /// A status code not in the fixed libopus set.
    #[error("opus: unknown error code {0}")]
    Unknown(i32),
}

impl Error {
    /// Maps a non-OK native status code to its variant.
    pub(crate) fn from_raw(code: c_int) -> Self {
        match code {
            ffi::OPUS_BAD_ARG => Self::BadArg,
            ffi::OPUS_BUFFER_TOO_SMALL => Self::BufferTooSmall,
            ffi::OPUS_INTERNAL_ERROR => Self::InternalError,
            ffi::OPUS_INVALID_PACKET => Self::InvalidPacket,
            ffi::OPUS_UNIMPLEMENTED => Self::Unimplemented,
            ffi::OPUS_INVALID_STATE => Self::InvalidState,
            ffi::OPUS_ALLOC_FAIL => Self::AllocFail,
            other => Self::Unknown(other),
        }
    }

    /// Returns the native libopus status code for this error.
    pub fn raw(&self) -> i32 {
        match self {
            Self::BadArg => ffi::OPUS_BAD_ARG,
            Self::BufferTooSmall => ffi::OPUS_BUFFER_TOO_SMALL,
            Self::InternalError => ffi::OPUS_INTERNAL_ERROR,
            Self::InvalidPacket => ffi::OPUS_INVALID_PACKET,
            Self::Unimplemented => ffi::OPUS_UNIMPLEMENTED,
            Self::InvalidState => ffi::OPUS_INVALID_STATE,
            Self::AllocFail => ffi::OPUS_ALLOC_FAIL,
            Self::Unknown(code) => *code,
        }
    }
}

/// Converts a native status code into a result.
pub(crate) fn check(code: c_int) -> Result<(), Error> {
    if code == ffi::OPUS_OK {
        Ok(())
    } else {
        Err(Error::from_raw(code))
    }
}
