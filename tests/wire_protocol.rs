//! Wire-level tests for the bit-banged two-wire interface.
//!
//! These drive the real [`Interface`] against `embedded-hal-mock` pin
//! expectations, so every test asserts the exact sequence of levels on the
//! clock and data lines, bit for bit as the controller samples them.
//!
//! Run with: cargo test --test wire_protocol

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use tm1637::{Brightness, Display, DisplayInterface, Interface};

fn set(state: PinState) -> PinTransaction {
    PinTransaction::set(state)
}

/// Expected clock-line writes for one transaction carrying `bytes`.
fn clk_waveform(bytes: &[u8]) -> Vec<PinTransaction> {
    let mut seq = Vec::new();
    // Start condition: clock raised, then lowered after the data edge
    seq.push(set(PinState::High));
    seq.push(set(PinState::Low));
    for _ in bytes {
        // 8 data bits plus the ack slot, one pulse each
        for _ in 0..9 {
            seq.push(set(PinState::Low));
            seq.push(set(PinState::High));
        }
    }
    // Stop condition
    seq.push(set(PinState::Low));
    seq.push(set(PinState::High));
    seq
}

/// Expected data-line writes for one transaction carrying `bytes`.
fn dio_waveform(bytes: &[u8]) -> Vec<PinTransaction> {
    let mut seq = Vec::new();
    // Start condition: idle high, then the falling edge
    seq.push(set(PinState::High));
    seq.push(set(PinState::Low));
    for &byte in bytes {
        let mut bits = byte;
        for _ in 0..8 {
            seq.push(set(if bits & 0x01 != 0 {
                PinState::High
            } else {
                PinState::Low
            }));
            bits >>= 1;
        }
        // Ack slot release
        seq.push(set(PinState::High));
    }
    // Stop condition: held low, then the rising edge
    seq.push(set(PinState::Low));
    seq.push(set(PinState::High));
    seq
}

/// Expected waveforms for a whole sequence of transactions.
fn waveforms(transactions: &[&[u8]]) -> (Vec<PinTransaction>, Vec<PinTransaction>) {
    let mut clk = Vec::new();
    let mut dio = Vec::new();
    for bytes in transactions {
        clk.extend(clk_waveform(bytes));
        dio.extend(dio_waveform(bytes));
    }
    (clk, dio)
}

#[test]
fn byte_is_transmitted_lsb_first() {
    // 0b1011_0010 must appear on the data line as 0,1,0,0,1,1,0,1
    let dio_expectations = [
        set(PinState::High), // idle
        set(PinState::Low),  // start edge
        set(PinState::Low),  // bit 0
        set(PinState::High), // bit 1
        set(PinState::Low),  // bit 2
        set(PinState::Low),  // bit 3
        set(PinState::High), // bit 4
        set(PinState::High), // bit 5
        set(PinState::Low),  // bit 6
        set(PinState::High), // bit 7
        set(PinState::High), // ack release
        set(PinState::Low),  // stop, held low
        set(PinState::High), // stop edge
    ];
    let clk_expectations = clk_waveform(&[0b1011_0010]);

    let mut clk = PinMock::new(&clk_expectations);
    let mut dio = PinMock::new(&dio_expectations);

    let mut interface = Interface::with_bit_delay(clk.clone(), dio.clone(), NoopDelay, 0);
    interface.send_bytes(&[0b1011_0010]).unwrap();

    clk.done();
    dio.done();
}

#[test]
fn transaction_is_framed_by_start_and_stop() {
    let (clk_expectations, dio_expectations) = waveforms(&[&[0x40]]);

    let mut clk = PinMock::new(&clk_expectations);
    let mut dio = PinMock::new(&dio_expectations);

    let mut interface = Interface::with_bit_delay(clk.clone(), dio.clone(), NoopDelay, 0);
    interface.send_bytes(&[0x40]).unwrap();

    clk.done();
    dio.done();
}

#[test]
fn multi_byte_transaction_uses_single_framing() {
    // Address byte plus two segment bytes inside one start/stop pair
    let bytes = [0xC0, 0x3F, 0x06];
    let (clk_expectations, dio_expectations) = waveforms(&[&bytes]);

    let mut clk = PinMock::new(&clk_expectations);
    let mut dio = PinMock::new(&dio_expectations);

    let mut interface = Interface::with_bit_delay(clk.clone(), dio.clone(), NoopDelay, 0);
    interface.send_bytes(&bytes).unwrap();

    clk.done();
    dio.done();
}

#[test]
fn set_segments_waveform_end_to_end() {
    // "1234" at full brightness: mode-set, address + 4 segment bytes,
    // then display control, each in its own transaction
    let (clk_expectations, dio_expectations) = waveforms(&[
        &[0x40],
        &[0xC0, 0x06, 0x5B, 0x4F, 0x66],
        &[0x88 | 0x07],
    ]);

    let mut clk = PinMock::new(&clk_expectations);
    let mut dio = PinMock::new(&dio_expectations);

    let interface = Interface::with_bit_delay(clk.clone(), dio.clone(), NoopDelay, 0);
    let mut display = Display::new(interface);
    assert!(display.show_number(1234, Brightness::MAX).is_ok());

    clk.done();
    dio.done();
}

#[test]
fn colon_reaches_the_wire_in_the_second_data_byte() {
    // Blank frame with the colon lit: only byte index 1 carries 0x80
    let (clk_expectations, dio_expectations) = waveforms(&[
        &[0x40],
        &[0xC0, 0x00, 0x80, 0x00, 0x00],
        &[0x88 | 0x03],
    ]);

    let mut clk = PinMock::new(&clk_expectations);
    let mut dio = PinMock::new(&dio_expectations);

    let interface = Interface::with_bit_delay(clk.clone(), dio.clone(), NoopDelay, 0);
    let mut display = Display::new(interface);
    assert!(display.set_colon(true, Brightness::new(3)).is_ok());

    clk.done();
    dio.done();
}
