//! Extended-alphabet glyph resolution
//!
//! A [`GlyphResolver`] maps a decoded code point to something the
//! controller can print. Two strategies exist, matching the two module
//! variants that share the same backpack wiring:
//!
//! - [`SoftwareGlyphs`] - plain LCD1602; Cyrillic glyphs are generated into
//!   the 8 CGRAM slots on demand through a [`GlyphCache`]
//! - [`RomGlyphs`] - WH1602B-CTK; Cyrillic glyphs sit in the character ROM
//!
//! The driver holds one resolver chosen at construction. [`AnyGlyphs`]
//! picks the strategy at runtime from a [`GlyphVariant`].

pub mod cache;
pub mod rom;
pub mod software;
pub mod tables;

pub use cache::GlyphCache;
pub use rom::RomGlyphs;
pub use software::SoftwareGlyphs;
pub use tables::Bitmap;

use crate::config::GlyphVariant;

/// What to send to the display for one code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Renderable {
    /// Character code (ASCII or ROM address)
    Code(u8),
    /// Glyph already resident in a CGRAM slot
    Slot(u8),
    /// Glyph must be written to `slot` before printing it
    Program {
        /// Code point being programmed
        code_point: u32,
        /// Target CGRAM slot
        slot: u8,
        /// Pixel rows
        bitmap: &'static Bitmap,
    },
}

/// Strategy for turning code points into printable units
pub trait GlyphResolver {
    /// Resolve one code point
    ///
    /// Unknown code points resolve to their low byte as a raw character code.
    fn resolve(&mut self, code_point: u32) -> Renderable;

    /// The glyph from a [`Renderable::Program`] was written successfully
    fn glyph_programmed(&mut self, _code_point: u32) {}

    /// Forget all generated glyphs (display re-initialized)
    fn reset(&mut self) {}
}

/// Look up a code point in a sorted `(code point, code)` override table
pub(crate) fn lookalike(table: &[(u32, u8)], code_point: u32) -> Option<u8> {
    table
        .binary_search_by_key(&code_point, |&(cp, _)| cp)
        .ok()
        .and_then(|idx| table.get(idx))
        .map(|&(_, code)| code)
}

/// Raw character code for an unknown code point
pub(crate) fn raw_code(code_point: u32) -> u8 {
    code_point.to_le_bytes()[0]
}

/// Runtime-selected glyph strategy
#[derive(Debug, Clone)]
pub enum AnyGlyphs {
    /// CGRAM-generated glyphs
    Software(SoftwareGlyphs),
    /// Character ROM glyphs
    Rom(RomGlyphs),
}

impl AnyGlyphs {
    /// Strategy for a configured module variant
    pub fn new(variant: GlyphVariant) -> Self {
        match variant {
            GlyphVariant::Software => AnyGlyphs::Software(SoftwareGlyphs::new()),
            GlyphVariant::Rom => AnyGlyphs::Rom(RomGlyphs),
        }
    }

    /// Variant of this strategy
    pub fn variant(&self) -> GlyphVariant {
        match self {
            AnyGlyphs::Software(_) => GlyphVariant::Software,
            AnyGlyphs::Rom(_) => GlyphVariant::Rom,
        }
    }
}

impl From<GlyphVariant> for AnyGlyphs {
    fn from(variant: GlyphVariant) -> Self {
        Self::new(variant)
    }
}

impl GlyphResolver for AnyGlyphs {
    fn resolve(&mut self, code_point: u32) -> Renderable {
        match self {
            AnyGlyphs::Software(glyphs) => glyphs.resolve(code_point),
            AnyGlyphs::Rom(glyphs) => glyphs.resolve(code_point),
        }
    }

    fn glyph_programmed(&mut self, code_point: u32) {
        match self {
            AnyGlyphs::Software(glyphs) => glyphs.glyph_programmed(code_point),
            AnyGlyphs::Rom(glyphs) => glyphs.glyph_programmed(code_point),
        }
    }

    fn reset(&mut self) {
        match self {
            AnyGlyphs::Software(glyphs) => glyphs.reset(),
            AnyGlyphs::Rom(glyphs) => glyphs.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_glyphs_dispatch() {
        let mut rom = AnyGlyphs::new(GlyphVariant::Rom);
        assert_eq!(rom.variant(), GlyphVariant::Rom);
        assert_eq!(rom.resolve('Я' as u32), Renderable::Code(177));

        let mut soft = AnyGlyphs::from(GlyphVariant::Software);
        assert_eq!(soft.variant(), GlyphVariant::Software);
        assert!(matches!(
            soft.resolve('Я' as u32),
            Renderable::Program { slot: 0, .. }
        ));
    }

    #[test]
    fn test_raw_code_keeps_low_byte() {
        assert_eq!(raw_code(0x41), 0x41);
        assert_eq!(raw_code(0x20AC), 0xAC);
    }
}
