//! Core display operations

use log::trace;

use crate::command::{ADDRESS_BASE, BRIGHTNESS_MASK, CONTROL_BASE, DATA_AUTO_INCREMENT, DISPLAY_ON};
use crate::error::Error;
use crate::frame::{Brightness, Frame};
use crate::interface::DisplayInterface;
use crate::segments::DIGITS;

/// High-level driver for a TM1637-class 4-digit display
///
/// Owns a [`DisplayInterface`] and turns frames into the controller's
/// three-transaction update sequence. All operations block the calling
/// context until the waveform completes; there is no cancellation.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Transmit one frame to the display
    ///
    /// Issues exactly three transactions, in strict order:
    ///
    /// 1. data command: auto-increment addressing mode
    /// 2. address command followed by the 4 segment bytes, with the colon
    ///    bit OR'ed into byte index 1 when `frame.colon` is set
    /// 3. display control: display-on with the frame's 3-bit brightness
    ///
    /// The sequence is not atomic across interruption: if the calling
    /// process halts between transactions the display is left partially
    /// updated. That is a characteristic of the hardware protocol, and no
    /// lock is layered on top of it; a single device instance is already
    /// exclusive through `&mut self`.
    pub fn set_segments(&mut self, frame: &Frame) -> Result<(), Error<I>> {
        let payload = frame.payload();
        trace!(
            "frame {:02x?} colon={} brightness={}",
            payload,
            frame.colon,
            frame.brightness.level()
        );

        self.send(&[DATA_AUTO_INCREMENT])?;

        let mut data = [0u8; DIGITS + 1];
        data[0] = ADDRESS_BASE;
        data[1..].copy_from_slice(&payload);
        self.send(&data)?;

        let control = CONTROL_BASE | DISPLAY_ON | (frame.brightness.level() & BRIGHTNESS_MASK);
        self.send(&[control])
    }

    /// Display an integer, right-aligned with leading zeros
    ///
    /// The frame is fully validated before any bus activity, so a rejected
    /// value leaves the display untouched. Negative values render the minus
    /// sign in the leftmost slot (see [`encode_number`](crate::encode_number)).
    pub fn show_number(&mut self, value: i32, brightness: Brightness) -> Result<(), Error<I>> {
        let frame = Frame::number(value, brightness)?;
        self.set_segments(&frame)
    }

    /// Display up to 4 characters, left-aligned and blank-padded
    pub fn show_text(&mut self, text: &str, brightness: Brightness) -> Result<(), Error<I>> {
        let frame = Frame::text(text, brightness)?;
        self.set_segments(&frame)
    }

    /// Light or extinguish the colon, blanking the digits
    pub fn set_colon(&mut self, on: bool, brightness: Brightness) -> Result<(), Error<I>> {
        let mut frame = Frame::blank(brightness);
        frame.colon = on;
        self.set_segments(&frame)
    }

    /// Blank all segments and the colon
    pub fn clear(&mut self) -> Result<(), Error<I>> {
        self.set_segments(&Frame::blank(Brightness::default()))
    }

    /// Turn the display off
    ///
    /// Sends the control base byte without the display-on bit. The segment
    /// data is retained by the controller and reappears on the next frame.
    pub fn power_off(&mut self) -> Result<(), Error<I>> {
        self.send(&[CONTROL_BASE])
    }

    /// Release the underlying interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Send one transaction through the interface
    fn send(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.interface.send_bytes(bytes).map_err(Error::Interface)
    }
}
