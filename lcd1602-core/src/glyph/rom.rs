//! Character ROM glyphs for WH1602B-CTK modules

use super::tables;
use super::{lookalike, raw_code, GlyphResolver, Renderable};
use crate::cmd::ROM_DEGREE_SIGN;

/// Cyrillic letters printed as the Latin letter they look like
///
/// `Ё` is missing on purpose: the ROM has a real glyph for it.
static LOOKALIKES: [(u32, u8); 20] = [
    (0x00B0, ROM_DEGREE_SIGN), // °
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
    (1068, b'b'), // Ь
    (1072, b'a'), // а
    (1077, b'e'), // е
    (1086, b'o'), // о
    (1088, b'p'), // р
    (1089, b'c'), // с
    (1091, b'y'), // у
    (1093, b'x'), // х
];

/// Stateless resolver for modules with a Cyrillic character ROM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RomGlyphs;

impl GlyphResolver for RomGlyphs {
    fn resolve(&mut self, code_point: u32) -> Renderable {
        let code = lookalike(&LOOKALIKES, code_point)
            .or_else(|| tables::rom_code(code_point))
            .unwrap_or_else(|| raw_code(code_point));
        Renderable::Code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookalikes_sorted() {
        assert!(LOOKALIKES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_rom_codes() {
        let mut rom = RomGlyphs;
        assert_eq!(rom.resolve('Б' as u32), Renderable::Code(160));
        assert_eq!(rom.resolve('Ё' as u32), Renderable::Code(162));
        assert_eq!(rom.resolve('ё' as u32), Renderable::Code(181));
        assert_eq!(rom.resolve('я' as u32), Renderable::Code(199));
    }

    #[test]
    fn test_lookalikes_win() {
        let mut rom = RomGlyphs;
        assert_eq!(rom.resolve('Ь' as u32), Renderable::Code(b'b'));
        assert_eq!(rom.resolve('М' as u32), Renderable::Code(b'M'));
        assert_eq!(rom.resolve(0xB0), Renderable::Code(223));
    }

    #[test]
    fn test_never_programs() {
        let mut rom = RomGlyphs;
        for cp in 0u32..0x500 {
            assert!(matches!(rom.resolve(cp), Renderable::Code(_)));
        }
        assert_eq!(rom.resolve('~' as u32), Renderable::Code(b'~'));
        assert_eq!(rom.resolve(0x20AC), Renderable::Code(0xAC));
    }
}
