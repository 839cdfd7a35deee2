//! Display frame types
//!
//! A [`Frame`] is the complete visual state of the display at one point in
//! time: 4 segment bytes, the colon flag, and a brightness level. Frames are
//! built fresh for every update and discarded after transmission. The driver
//! keeps no framebuffer; the physical display is write-only and is itself
//! the only persistent state.

use crate::command::COLON_BIT;
use crate::error::EncodeError;
use crate::segments::{self, BLANK, DIGITS};

/// Display brightness, a 3-bit level from 0 (dimmest) to 7 (brightest)
///
/// Construction clamps out-of-range levels to 7, so a raw value can never
/// reach the control byte and corrupt the display-on bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest level (0)
    pub const MIN: Brightness = Brightness(0);
    /// Brightest level (7)
    pub const MAX: Brightness = Brightness(7);

    /// Create a brightness level, clamping to the 3-bit range
    pub const fn new(level: u8) -> Self {
        if level > 7 {
            Brightness(7)
        } else {
            Brightness(level)
        }
    }

    /// The raw 3-bit level
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    /// Full brightness, matching the controller's reset-time appearance
    fn default() -> Self {
        Self::MAX
    }
}

/// One complete visual state of the 4-digit display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Segment patterns for the 4 digit slots, left to right
    pub segments: [u8; DIGITS],
    /// Whether the colon between slots 1 and 2 is lit
    pub colon: bool,
    /// Brightness level for this frame
    pub brightness: Brightness,
}

impl Frame {
    /// Create a frame from raw segment patterns
    pub const fn new(segments: [u8; DIGITS], colon: bool, brightness: Brightness) -> Self {
        Self {
            segments,
            colon,
            brightness,
        }
    }

    /// A frame with all segments dark and the colon off
    pub const fn blank(brightness: Brightness) -> Self {
        Self::new([BLANK; DIGITS], false, brightness)
    }

    /// Encode an integer into a frame
    ///
    /// See [`encode_number`](crate::encode_number) for range and
    /// negative-value semantics.
    pub fn number(value: i32, brightness: Brightness) -> Result<Self, EncodeError> {
        Ok(Self::new(segments::encode_number(value)?, false, brightness))
    }

    /// Encode a string into a frame
    ///
    /// See [`encode_text`](crate::encode_text) for length and padding
    /// semantics.
    pub fn text(text: &str, brightness: Brightness) -> Result<Self, EncodeError> {
        Ok(Self::new(segments::encode_text(text)?, false, brightness))
    }

    /// The 4 bytes as they go on the wire, colon bit OR'ed into slot 1
    pub(crate) fn payload(&self) -> [u8; DIGITS] {
        let mut bytes = self.segments;
        if self.colon {
            bytes[1] |= COLON_BIT;
        }
        bytes
    }
}
