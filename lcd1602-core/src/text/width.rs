//! Printed width of encoded text
//!
//! Counts symbols by UTF-8 lead byte so alignment can be computed for
//! mixed ASCII / Cyrillic text. Unlike the print decoder, this recognizes
//! one- to four-byte sequences.

/// Result of [`symbol_count`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SymbolCount {
    /// Number of symbols (screen cells)
    pub symbols: usize,
    /// Number of bytes the symbols span
    pub bytes: usize,
}

/// Count the symbols in `bytes`
///
/// Returns `None` if an octet is neither ASCII nor a UTF-8 lead byte.
/// A sequence cut short by the end of the input counts as one symbol.
pub fn symbol_count(bytes: &[u8]) -> Option<SymbolCount> {
    let mut count = SymbolCount::default();

    while let Some(&lead) = bytes.get(count.bytes) {
        let len = sequence_len(lead)?;
        count.bytes = (count.bytes + len).min(bytes.len());
        count.symbols += 1;
    }

    Some(count)
}

/// Screen cells `bytes` occupies, for alignment
///
/// Falls back to the byte length when [`symbol_count`] rejects the input.
pub fn display_width(bytes: &[u8]) -> usize {
    symbol_count(bytes).map_or(bytes.len(), |count| count.symbols)
}

/// Length of the sequence introduced by `lead`
fn sequence_len(lead: u8) -> Option<usize> {
    if lead >> 7 == 0 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ascii() {
        assert_eq!(
            symbol_count(b"Hello"),
            Some(SymbolCount { symbols: 5, bytes: 5 })
        );
    }

    #[test]
    fn test_mixed_widths() {
        // 1 + 2 + 3 + 4 bytes
        let text = "aЖ€😀";
        assert_eq!(
            symbol_count(text.as_bytes()),
            Some(SymbolCount { symbols: 4, bytes: 10 })
        );
    }

    #[test]
    fn test_stray_continuation_byte() {
        assert_eq!(symbol_count(&[b'a', 0x80]), None);
        assert_eq!(display_width(&[b'a', 0x80]), 2);
    }

    #[test]
    fn test_display_width_counts_cells() {
        assert_eq!(display_width("Привет".as_bytes()), 6);
        assert_eq!(display_width(b""), 0);
    }

    #[test]
    fn test_truncated_sequence() {
        assert_eq!(
            symbol_count(&[b'a', 0xE2, 0x82]),
            Some(SymbolCount { symbols: 2, bytes: 3 })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(symbol_count(b""), Some(SymbolCount::default()));
    }

    proptest! {
        #[test]
        fn test_matches_char_count_for_valid_text(text in "\\PC{0,32}") {
            let count = symbol_count(text.as_bytes()).unwrap();
            prop_assert_eq!(count.symbols, text.chars().count());
            prop_assert_eq!(count.bytes, text.len());
        }
    }
}
