//! Static Cyrillic glyph tables
//!
//! Both tables are sorted by code point and searched with a binary search.
//! Letters that look the same as a Latin letter in the stock ROM are not
//! listed here; the resolvers map them to the Latin code directly.

/// 5x8 glyph bitmap, one byte per pixel row (low 5 bits used)
pub type Bitmap = [u8; 8];

/// Code point to CGRAM bitmap, for modules without a Cyrillic ROM
pub static BITMAPS: [(u32, Bitmap); 47] = [
    (1041, [0b11111, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b11110, 0b00000]), // Б
    (1043, [0b11111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b00000]), // Г
    (1044, [0b00110, 0b01010, 0b01010, 0b01010, 0b01010, 0b01010, 0b11111, 0b10001]), // Д
    (1046, [0b10101, 0b10101, 0b10101, 0b01110, 0b10101, 0b10101, 0b10101, 0b00000]), // Ж
    (1047, [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110, 0b00000]), // З
    (1048, [0b10001, 0b10001, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b00000]), // И
    (1049, [0b10101, 0b10001, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b00000]), // Й
    (1051, [0b00111, 0b01001, 0b01001, 0b01001, 0b01001, 0b01001, 0b10001, 0b00000]), // Л
    (1055, [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b00000]), // П
    (1059, [0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110, 0b00000]), // У
    (1060, [0b00100, 0b01110, 0b10101, 0b10101, 0b10101, 0b01110, 0b00100, 0b00000]), // Ф
    (1062, [0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b11111, 0b00001]), // Ц
    (1063, [0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b00001, 0b00000]), // Ч
    (1064, [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b11111, 0b00000]), // Ш
    (1065, [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b11111, 0b00001]), // Щ
    (1066, [0b11000, 0b01000, 0b01000, 0b01110, 0b01001, 0b01001, 0b01110, 0b00000]), // Ъ
    (1067, [0b10001, 0b10001, 0b10001, 0b11101, 0b10011, 0b10011, 0b11101, 0b00000]), // Ы
    (1068, [0b10000, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b11110, 0b00000]), // Ь
    (1069, [0b01110, 0b10001, 0b00001, 0b00111, 0b00001, 0b10001, 0b01110, 0b00000]), // Э
    (1070, [0b10010, 0b10101, 0b10101, 0b11101, 0b10101, 0b10101, 0b10010, 0b00000]), // Ю
    (1071, [0b01111, 0b10001, 0b10001, 0b01111, 0b00101, 0b01001, 0b10001, 0b00000]), // Я
    (1073, [0b00011, 0b01100, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110, 0b00000]), // б
    (1074, [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10001, 0b11110, 0b00000]), // в
    (1075, [0b00000, 0b00000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000, 0b00000]), // г
    (1076, [0b00000, 0b00000, 0b00110, 0b01010, 0b01010, 0b01010, 0b11111, 0b10001]), // д
    (1078, [0b00000, 0b00000, 0b10101, 0b10101, 0b01110, 0b10101, 0b10101, 0b00000]), // ж
    (1079, [0b00000, 0b00000, 0b01110, 0b10001, 0b00110, 0b10001, 0b01110, 0b00000]), // з
    (1080, [0b00000, 0b00000, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b00000]), // и
    (1081, [0b01010, 0b00100, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b00000]), // й
    (1082, [0b00000, 0b00000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b00000]), // к
    (1083, [0b00000, 0b00000, 0b00111, 0b01001, 0b01001, 0b01001, 0b10001, 0b00000]), // л
    (1084, [0b00000, 0b00000, 0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b00000]), // м
    (1085, [0b00000, 0b00000, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b00000]), // н
    (1087, [0b00000, 0b00000, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b00000]), // п
    (1090, [0b00000, 0b00000, 0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000]), // т
    (1092, [0b00000, 0b00000, 0b00100, 0b01110, 0b10101, 0b01110, 0b00100, 0b00000]), // ф
    (1094, [0b00000, 0b00000, 0b10010, 0b10010, 0b10010, 0b10010, 0b11111, 0b00001]), // ц
    (1095, [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b00000]), // ч
    (1096, [0b00000, 0b00000, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111, 0b00000]), // ш
    (1097, [0b00000, 0b00000, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111, 0b00001]), // щ
    (1098, [0b00000, 0b00000, 0b11000, 0b01000, 0b01110, 0b01001, 0b01110, 0b00000]), // ъ
    (1099, [0b00000, 0b00000, 0b10001, 0b10001, 0b11101, 0b10011, 0b11101, 0b00000]), // ы
    (1100, [0b00000, 0b00000, 0b10000, 0b10000, 0b11110, 0b10001, 0b11110, 0b00000]), // ь
    (1101, [0b00000, 0b00000, 0b01110, 0b10001, 0b00111, 0b10001, 0b01110, 0b00000]), // э
    (1102, [0b00000, 0b00000, 0b10010, 0b10101, 0b11101, 0b10101, 0b10010, 0b00000]), // ю
    (1103, [0b00000, 0b00000, 0b01111, 0b10001, 0b01111, 0b00101, 0b01001, 0b00000]), // я
    (1105, [0b01010, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01111, 0b00000]), // ё
];

/// Code point to character ROM address on WH1602B-CTK modules
pub static ROM_CODES: [(u32, u8); 47] = [
    (1025, 162), // Ё
    (1041, 160), // Б
    (1043, 161), // Г
    (1044, 224), // Д
    (1046, 163), // Ж
    (1047, 164), // З
    (1048, 165), // И
    (1049, 166), // Й
    (1051, 167), // Л
    (1055, 168), // П
    (1059, 169), // У
    (1060, 170), // Ф
    (1062, 225), // Ц
    (1063, 171), // Ч
    (1064, 172), // Ш
    (1065, 226), // Щ
    (1066, 173), // Ъ
    (1067, 174), // Ы
    (1069, 175), // Э
    (1070, 176), // Ю
    (1071, 177), // Я
    (1073, 178), // б
    (1074, 179), // в
    (1075, 180), // г
    (1076, 227), // д
    (1078, 182), // ж
    (1079, 183), // з
    (1080, 184), // и
    (1081, 185), // й
    (1082, 186), // к
    (1083, 187), // л
    (1084, 188), // м
    (1085, 189), // н
    (1087, 190), // п
    (1090, 191), // т
    (1092, 228), // ф
    (1094, 229), // ц
    (1095, 192), // ч
    (1096, 193), // ш
    (1097, 230), // щ
    (1098, 194), // ъ
    (1099, 195), // ы
    (1100, 196), // ь
    (1101, 197), // э
    (1102, 198), // ю
    (1103, 199), // я
    (1105, 181), // ё
];

/// Bitmap for a code point, if it needs a generated glyph
pub fn bitmap(code_point: u32) -> Option<&'static Bitmap> {
    BITMAPS
        .binary_search_by_key(&code_point, |&(cp, _)| cp)
        .ok()
        .and_then(|idx| BITMAPS.get(idx))
        .map(|(_, bitmap)| bitmap)
}

/// ROM address for a code point on Cyrillic ROM modules
pub fn rom_code(code_point: u32) -> Option<u8> {
    ROM_CODES
        .binary_search_by_key(&code_point, |&(cp, _)| cp)
        .ok()
        .and_then(|idx| ROM_CODES.get(idx))
        .map(|&(_, code)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sorted() {
        assert!(BITMAPS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(ROM_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_bitmaps_fit_5_columns() {
        for (_, bitmap) in BITMAPS.iter() {
            assert!(bitmap.iter().all(|&row| row < 0b100000));
        }
    }

    #[test]
    fn test_bitmap_lookup() {
        assert_eq!(bitmap('Ж' as u32).map(|b| b[3]), Some(0b01110));
        assert_eq!(bitmap('ё' as u32).map(|b| b[0]), Some(0b01010));
        assert!(bitmap('А' as u32).is_none());
        assert!(bitmap('x' as u32).is_none());
    }

    #[test]
    fn test_rom_lookup() {
        assert_eq!(rom_code('Ё' as u32), Some(162));
        assert_eq!(rom_code('щ' as u32), Some(230));
        assert_eq!(rom_code('Ь' as u32), None);
        assert_eq!(rom_code(0x41), None);
    }
}
