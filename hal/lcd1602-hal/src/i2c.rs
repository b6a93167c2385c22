//! I2C device addressing
//!
//! Port expander boards are usually labelled with the 8-bit address form,
//! where bit 0 carries the read/write flag. The bus works with the 7-bit
//! form, so the label value has to be shifted right by one.

/// PCF8574A backpack address (8-bit form)
pub const PCF8574A_ADDR: u8 = 0x7E;

/// PCF8574 backpack address (8-bit form)
pub const PCF8574_ADDR: u8 = 0x4E;

/// 7-bit I2C device address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// Create from a 7-bit address
    ///
    /// Returns `None` if the value does not fit in 7 bits.
    pub const fn new(address: u8) -> Option<Self> {
        if address > 0x7F {
            None
        } else {
            Some(Self(address))
        }
    }

    /// Create from the 8-bit form by discarding the read/write bit
    pub const fn from_8bit(address: u8) -> Self {
        Self(address >> 1)
    }

    /// The 7-bit address as sent on the bus
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 8-bit form (read/write bit cleared)
    pub const fn to_8bit(self) -> u8 {
        self.0 << 1
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::from_8bit(PCF8574A_ADDR)
    }
}
