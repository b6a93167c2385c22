//! LCD1602 bus transport
//!
//! This crate owns the boundary between the display drivers and the
//! physical I2C bus. The bus itself is any [`embedded_hal::i2c::I2c`]
//! implementation; this crate wraps it in a [`SharedBus`] handle that
//! serializes every transfer so several display instances (or threads)
//! sharing one bus never interleave their byte sequences.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lcd1602-drivers (Lcd, ProtocolEngine)  │
//! └─────────────────────────────────────────┘
//!                     │  &SharedBus
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcd1602-hal (this crate)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded_hal::i2c::I2c implementation  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Types
//!
//! - [`i2c::DeviceAddress`] - 7-bit device address
//! - [`bus::SharedBus`] - lock-owning transport handle
//! - [`bus::BusError`] - transport failures

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod i2c;

// Re-export key types at crate root for convenience
pub use bus::{BusError, SharedBus, MAX_WRITE_LEN};
pub use i2c::{DeviceAddress, PCF8574A_ADDR, PCF8574_ADDR};
