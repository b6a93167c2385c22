//! PCF8574 I2C backpack
//!
//! The expander drives the HD44780 in 4-bit mode. Each bus write sets all
//! eight expander pins at once:
//!
//! | Pin | Signal    |
//! |-----|-----------|
//! | P0  | RS        |
//! | P1  | RW        |
//! | P2  | EN        |
//! | P3  | Backlight |
//! | P4-P7 | D4-D7   |
//!
//! A nibble is latched on the falling edge of EN, so every nibble costs two
//! writes: once with EN high, then the same pins with EN low.

/// Expander pin bits
pub mod pin {
    /// Register select (0 = instruction, 1 = data)
    pub const RS: u8 = 0x01;
    /// Read/write (always low, the bus is write-only)
    pub const RW: u8 = 0x02;
    /// Enable strobe
    pub const EN: u8 = 0x04;
    /// Backlight transistor
    pub const BACKLIGHT: u8 = 0x08;
    /// Data lines D4-D7
    pub const DATA: u8 = 0xF0;
}

/// Register selected by a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Instruction register
    Command,
    /// Data register (DDRAM or CGRAM)
    Data,
}

impl Register {
    const fn bits(self) -> u8 {
        match self {
            Register::Command => 0,
            Register::Data => pin::RS,
        }
    }
}

/// The four writes of one byte in 4-bit mode: high nibble then low nibble
pub const fn nibble_frames(byte: u8, register: Register, backlight: bool) -> [u8; 4] {
    let flags = register.bits() | if backlight { pin::BACKLIGHT } else { 0 };
    let high = (byte & pin::DATA) | flags;
    let low = ((byte << 4) & pin::DATA) | flags;
    [high | pin::EN, high, low | pin::EN, low]
}

/// The writes of one init pattern while the controller may still be in 8-bit mode
///
/// Only the high nibble reaches the controller. The backlight stays off
/// until the interface is set up.
pub const fn init_frames(pattern: u8) -> [u8; 3] {
    let data = pattern & pin::DATA;
    [data, data | pin::EN, data & !pin::EN]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_command_frames() {
        // function set 0x28, backlight on
        assert_eq!(
            nibble_frames(0x28, Register::Command, true),
            [0x2C, 0x28, 0x8C, 0x88]
        );
    }

    #[test]
    fn test_data_frames() {
        // 'H' = 0x48, backlight off
        assert_eq!(
            nibble_frames(b'H', Register::Data, false),
            [0x45, 0x41, 0x85, 0x81]
        );
    }

    #[test]
    fn test_init_frames() {
        assert_eq!(init_frames(0x30), [0x30, 0x34, 0x30]);
        assert_eq!(init_frames(0x20), [0x20, 0x24, 0x20]);
    }

    proptest! {
        #[test]
        fn test_strobe_pairs(byte: u8, data: bool, backlight: bool) {
            let register = if data { Register::Data } else { Register::Command };
            let frames = nibble_frames(byte, register, backlight);

            // EN high then low with identical pins otherwise
            prop_assert_eq!(frames[0], frames[1] | pin::EN);
            prop_assert_eq!(frames[2], frames[3] | pin::EN);
            prop_assert_eq!(frames[1] & pin::EN, 0);
            prop_assert_eq!(frames[3] & pin::EN, 0);
            prop_assert_eq!(frames[1] & pin::RW, 0);

            prop_assert_eq!((frames[1] & pin::DATA) | (frames[3] >> 4), byte);
            prop_assert_eq!(frames[1] & pin::RS != 0, data);
            prop_assert_eq!(frames[3] & pin::BACKLIGHT != 0, backlight);
        }
    }
}
