//! CGRAM-generated glyphs for modules without a Cyrillic ROM

use super::cache::GlyphCache;
use super::tables;
use super::{lookalike, raw_code, GlyphResolver, Renderable};
use crate::cmd::ROM_DEGREE_SIGN;

/// Cyrillic letters printed as the Latin letter they look like
static LOOKALIKES: [(u32, u8); 20] = [
    (0x00B0, ROM_DEGREE_SIGN), // °
    (1025, b'E'), // Ё
    (1040, b'A'), // А
    (1042, b'B'), // В
    (1045, b'E'), // Е
    (1050, b'K'), // К
    (1052, b'M'), // М
    (1053, b'H'), // Н
    (1054, b'O'), // О
    (1056, b'P'), // Р
    (1057, b'C'), // С
    (1058, b'T'), // Т
    (1061, b'X'), // Х
    (1072, b'a'), // а
    (1077, b'e'), // е
    (1086, b'o'), // о
    (1088, b'p'), // р
    (1089, b'c'), // с
    (1091, b'y'), // у
    (1093, b'x'), // х
];

/// Resolver backed by a per-display [`GlyphCache`]
#[derive(Debug, Clone, Default)]
pub struct SoftwareGlyphs {
    cache: GlyphCache,
}

impl SoftwareGlyphs {
    /// Create with an empty cache
    pub const fn new() -> Self {
        Self {
            cache: GlyphCache::new(),
        }
    }

    /// The glyph cache
    pub fn cache(&self) -> &GlyphCache {
        &self.cache
    }
}

impl GlyphResolver for SoftwareGlyphs {
    fn resolve(&mut self, code_point: u32) -> Renderable {
        if let Some(code) = lookalike(&LOOKALIKES, code_point) {
            return Renderable::Code(code);
        }

        let Some(bitmap) = tables::bitmap(code_point) else {
            return Renderable::Code(raw_code(code_point));
        };

        match self.cache.lookup(code_point) {
            Some(slot) => Renderable::Slot(slot),
            None => Renderable::Program {
                code_point,
                slot: self.cache.reserve(),
                bitmap,
            },
        }
    }

    fn glyph_programmed(&mut self, code_point: u32) {
        self.cache.commit(code_point);
    }

    fn reset(&mut self) {
        self.cache.flush();
    }
}
