//! Error types for the driver
//!
//! This module defines error types for frame encoding ([`EncodeError`]) and
//! display operations ([`Error`]).
//!
//! Encoding is validated before any bus activity, so an [`EncodeError`]
//! guarantees nothing was transmitted and the display still shows its
//! previous frame. An [`Error::Interface`] means a pin write failed with a
//! transaction possibly in flight; the driver propagates it immediately
//! instead of retrying, because a retry mid-transaction would desynchronize
//! the start/stop framing.
//!
//! ## Example
//!
//! ```
//! use tm1637::{EncodeError, encode_number};
//!
//! // Magnitude does not fit 4 digits
//! let result = encode_number(10_000);
//! assert!(matches!(result, Err(EncodeError::NumberOutOfRange { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors detected while encoding a frame, before any bus activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Integer magnitude does not fit the 4 digit slots (>= 10000)
    NumberOutOfRange {
        /// The rejected value
        value: i32,
    },
    /// String is longer than the 4 digit slots
    TextTooLong {
        /// Character count of the rejected string
        len: usize,
    },
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodeError::NumberOutOfRange { value } => {
                write!(f, "value {value} does not fit 4 digits")
            }
            EncodeError::TextTooLong { len } => {
                write!(f, "text of {len} characters does not fit 4 digits")
            }
        }
    }
}

impl core::error::Error for EncodeError {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying pin error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Pin write failure from the [`DisplayInterface`] implementation
    Interface(I::Error),
    /// Frame encoding failure; nothing was transmitted
    Encode(EncodeError),
}

impl<I: DisplayInterface> From<EncodeError> for Error<I> {
    fn from(err: EncodeError) -> Self {
        Error::Encode(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(_) => write!(f, "Interface error"),
            Error::Encode(err) => write!(f, "{err}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}
