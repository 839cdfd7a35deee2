// TM1637 command definitions

// Data commands
pub const DATA_AUTO_INCREMENT: u8 = 0x40; // Write display data, auto-increment addressing

// Address commands
pub const ADDRESS_BASE: u8 = 0xC0; // Set display address to digit 0 (low 2 bits select the digit)

// Display control
pub const CONTROL_BASE: u8 = 0x80; // Display control base; on bit and brightness field OR into this
pub const DISPLAY_ON: u8 = 0x08; // Display-on bit within the control byte
pub const BRIGHTNESS_MASK: u8 = 0x07; // 3-bit brightness field of the control byte

// Payload bits
pub const COLON_BIT: u8 = 0x80; // Colon indicator, OR'ed into the second data byte
