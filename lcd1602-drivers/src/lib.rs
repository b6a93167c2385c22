//! Hardware driver implementations
//!
//! This crate drives HD44780 character displays through a PCF8574 I2C
//! backpack:
//!
//! - PCF8574 pin map and transfer frame encoding
//! - HD44780 protocol engine (nibble transfers, settle delays, power-on init)
//! - [`Lcd`], the display driver composing state tracking, text decoding
//!   and glyph resolution

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod hd44780;
pub mod pcf8574;

#[cfg(test)]
mod mock;

pub use hd44780::{Fit, Lcd, RomLcd, SoftwareLcd};
