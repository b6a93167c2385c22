//! Extended-alphabet decoder
//!
//! A narrow decoder for the two-byte sequences that cover the Cyrillic
//! block. A lead byte with its two high bits set, followed by a byte with
//! its high bit set, yields `(lead & 0x1F) << 6 | (next & 0x3F)`. Anything
//! else, including a lead byte at the end of the input, is passed through
//! as a single-byte code point. Decoding never fails.
//!
//! Three- and four-byte sequences are not recognized here; they decode as
//! a (meaningless) two-byte pair plus pass-through bytes.

/// Iterator over the code points of an encoded byte string
///
/// Cloning the iterator restarts decoding from the clone's position.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Decode `bytes` lazily into code points
pub fn code_points(bytes: &[u8]) -> CodePoints<'_> {
    CodePoints { bytes, pos: 0 }
}

impl<'a> CodePoints<'a> {
    /// Bytes not yet decoded
    pub fn remaining(&self) -> &'a [u8] {
        self.bytes.get(self.pos..).unwrap_or(&[])
    }
}

impl Iterator for CodePoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (code_point, used) = match *self.remaining() {
            [] => return None,
            [lead, next, ..] if lead & 0xC0 == 0xC0 && next & 0x80 == 0x80 => {
                ((u32::from(lead & 0x1F) << 6) | u32::from(next & 0x3F), 2)
            }
            [single, ..] => (u32::from(single), 1),
        };
        self.pos += used;
        Some(code_point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining().len();
        (left.div_ceil(2), Some(left))
    }
}

impl core::iter::FusedIterator for CodePoints<'_> {}
