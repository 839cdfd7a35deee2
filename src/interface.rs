//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with TM1637-class controllers over their two-wire bus.
//!
//! ## Hardware Requirements
//!
//! The TM1637 requires two GPIO pins:
//! - **CLK**: serial clock (output)
//! - **DIO**: serial data (output; this driver never reads the line)
//!
//! There is no chip select. Transactions are framed by edges on the data line
//! while the clock is held high: a falling edge opens a transaction (start
//! condition), a rising edge closes it (stop condition). Bytes are clocked out
//! least-significant bit first, one bit per clock pulse.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tm1637::{DisplayInterface, Interface};
//!
//! // Create interface with two output pins and a delay provider
//! let mut interface = Interface::new(clk_pin, dio_pin, delay);
//!
//! // Send one complete transaction (start condition, bytes, stop condition)
//! interface.send_bytes(&[0x40])?;
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Per-bit delay applied between line transitions, in microseconds.
///
/// The TM1637 tolerates clocks well below its 500 kHz maximum; 100 µs per
/// transition keeps the waveform visible on cheap logic analyzers and works
/// through long jumper wires. Hosts with slower GPIO can lower it via
/// [`Interface::with_bit_delay`] without code changes.
pub const DEFAULT_BIT_DELAY_US: u32 = 100;

/// Trait for the hardware interface to a TM1637-class controller
///
/// This trait abstracts one complete bus transaction, allowing
/// [`Display`](crate::Display) to work with any implementation:
/// the bit-banged [`Interface`] on real pins, or a recording mock in tests.
///
/// The unit of exchange is a whole transaction rather than a raw byte:
/// a byte on this bus is meaningless outside its enclosing start/stop
/// framing, so the trait does not allow one to be sent without it.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one complete transaction
    ///
    /// The implementation must:
    /// 1. Issue a start condition (data falls while clock is high)
    /// 2. Send each byte least-significant bit first, releasing the data
    ///    line for the ack slot after the eighth bit
    /// 3. Issue a stop condition (data rises while clock is high)
    ///
    /// # Errors
    ///
    /// Returns an error if a pin write fails. Implementations must propagate
    /// the failure immediately rather than retry: retrying mid-transaction
    /// would desynchronize the start/stop framing.
    fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Bit-banged two-wire interface for TM1637-class controllers
///
/// Implements [`DisplayInterface`] over embedded-hal v1.0 [`OutputPin`]s and
/// a [`DelayNs`] provider. Every bus operation is a direct, blocking sequence
/// of pin writes; the only suspension is the per-bit delay.
///
/// ## Type Parameters
///
/// * `CLK` - Clock pin implementing [`OutputPin`]
/// * `DIO` - Data pin implementing [`OutputPin`]
/// * `D` - Delay provider implementing [`DelayNs`]
pub struct Interface<CLK, DIO, D> {
    /// Serial clock pin
    clk: CLK,
    /// Serial data pin
    dio: DIO,
    /// Delay provider for per-bit timing
    delay: D,
    /// Microseconds to wait after each line transition
    bit_delay_us: u32,
}

impl<CLK, DIO, D, E> Interface<CLK, DIO, D>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    D: DelayNs,
    E: Debug,
{
    /// Create a new Interface with the default per-bit delay
    ///
    /// Both lines are left untouched until the first transaction; the first
    /// start condition drives them to the idle (high) state itself.
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        Self::with_bit_delay(clk, dio, delay, DEFAULT_BIT_DELAY_US)
    }

    /// Create a new Interface with a custom per-bit delay in microseconds
    pub fn with_bit_delay(clk: CLK, dio: DIO, delay: D, bit_delay_us: u32) -> Self {
        Self {
            clk,
            dio,
            delay,
            bit_delay_us,
        }
    }

    /// Release the pins and delay provider
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(self.bit_delay_us);
    }

    /// Open a transaction: data falls while the clock is held high
    fn start(&mut self) -> Result<(), E> {
        self.dio.set_high()?;
        self.bit_delay();
        self.clk.set_high()?;
        self.bit_delay();
        self.dio.set_low()?;
        self.bit_delay();
        self.clk.set_low()?;
        self.bit_delay();
        Ok(())
    }

    /// Close a transaction: data rises while the clock is held high
    fn stop(&mut self) -> Result<(), E> {
        self.clk.set_low()?;
        self.bit_delay();
        self.dio.set_low()?;
        self.bit_delay();
        self.clk.set_high()?;
        self.bit_delay();
        self.dio.set_high()?;
        self.bit_delay();
        Ok(())
    }

    /// Clock out one byte, least-significant bit first
    ///
    /// The data line is set while the clock is low and sampled by the
    /// controller on the rising edge. After the eighth bit the data line is
    /// released high for the ack slot; the protocol is write-only, so the
    /// acknowledge level is never read back.
    ///
    /// Only called between `start` and `stop`.
    fn write_byte(&mut self, mut byte: u8) -> Result<(), E> {
        for _ in 0..8 {
            self.clk.set_low()?;
            self.bit_delay();
            if byte & 0x01 != 0 {
                self.dio.set_high()?;
            } else {
                self.dio.set_low()?;
            }
            self.bit_delay();
            self.clk.set_high()?;
            self.bit_delay();
            byte >>= 1;
        }

        // Ninth clock pulse: release the data line for the ack slot
        self.clk.set_low()?;
        self.bit_delay();
        self.dio.set_high()?;
        self.bit_delay();
        self.clk.set_high()?;
        self.bit_delay();

        Ok(())
    }
}

impl<CLK, DIO, D, E> DisplayInterface for Interface<CLK, DIO, D>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    D: DelayNs,
    E: Debug,
{
    type Error = E;

    fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.start()?;
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        self.stop()
    }
}
