//! Driver for TM1637-class four-digit seven-segment display controllers
//!
//! The TM1637 speaks a bit-banged, two-wire serial protocol: a clock line
//! and a data line, no chip select, transactions framed by edges on the data
//! line while the clock is held high. This crate implements that protocol
//! over embedded-hal v1.0 [`OutputPin`](embedded_hal::digital::OutputPin)s
//! plus a [`DelayNs`](embedded_hal::delay::DelayNs) provider, and the frame
//! encoding (digits, a small letter set, minus sign, colon, brightness) on
//! top of it.
//!
//! ## Layers
//!
//! - [`Interface`]: the wire protocol. Start/stop conditions, LSB-first
//!   byte transmission, per-bit delay. Anything implementing
//!   [`DisplayInterface`] can stand in for it, which is how the driver is
//!   tested without hardware.
//! - [`Display`]: the three-transaction update sequence (mode-set, address
//!   plus 4 segment bytes, display control) and the user-facing operations.
//! - [`encode_char`] / [`encode_number`] / [`encode_text`]: pure encoding
//!   from logical content to segment patterns, usable standalone.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tm1637::{Brightness, Display, Interface};
//!
//! // clk and dio are embedded-hal OutputPins, delay a DelayNs provider
//! let interface = Interface::new(clk, dio, delay);
//! let mut display = Display::new(interface);
//!
//! display.show_number(1234, Brightness::MAX)?;
//! display.set_colon(true, Brightness::new(2))?;
//! display.show_text("HOLA", Brightness::default())?;
//! ```
//!
//! Encoding errors (a value over 4 digits, a string over 4 characters) are
//! detected before the first pin write, so a failed call never leaves a torn
//! frame on the glass. Unmapped characters are not errors; they render as
//! blank digits.

#![cfg_attr(not(test), no_std)]

mod command;
mod display;
mod error;
mod frame;
mod interface;
mod segments;

pub use display::Display;
pub use error::{EncodeError, Error};
pub use frame::{Brightness, Frame};
pub use interface::{DEFAULT_BIT_DELAY_US, DisplayInterface, Interface};
pub use segments::{BLANK, DIGITS, MINUS, encode_char, encode_number, encode_text};
