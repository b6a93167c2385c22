//! Board-agnostic core logic for HD44780 character displays
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Controller command set and flag bits
//! - Display state (cursor, mode flags, row addressing)
//! - Text decoding (two-byte extended sequences) and symbol counting
//! - Extended-alphabet glyph tables, the 8-slot CGRAM glyph cache and the
//!   glyph resolver strategies for software and ROM Cyrillic modules
//! - Configuration types
//! - The character display trait and layout helpers

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod cmd;
pub mod config;
pub mod glyph;
pub mod state;
pub mod text;
pub mod traits;

pub use config::{ConfigError, GlyphVariant, LcdConfig, RowOffsets};
pub use glyph::{AnyGlyphs, GlyphCache, GlyphResolver, Renderable, RomGlyphs, SoftwareGlyphs};
pub use state::{Cursor, DisplayState};
pub use text::Alignment;
pub use traits::{CharacterDisplay, DisplayExt};
