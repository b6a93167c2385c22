//! HD44780 character display controller
//!
//! - [`engine`] - byte transfers, settle delays, power-on sequence
//! - [`driver`] - the [`Lcd`] driver API
//! - [`format`] - bounded formatted printing

pub mod driver;
pub mod engine;
pub mod format;

pub use driver::{Lcd, RomLcd, SoftwareLcd};
pub use engine::{InitSequence, ProtocolEngine};
pub use format::Fit;
