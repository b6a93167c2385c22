//! Text alignment within a display row

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal alignment of printed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// Print at the cursor
    #[default]
    None,
    /// Print at the cursor
    Left,
    /// Pad so the text ends at the last column
    Right,
    /// Pad by half the free space (rounded down)
    Center,
}

/// Spaces to print before text of `length` symbols on a `cols` wide row
pub fn leading_padding(length: usize, cols: u8, alignment: Alignment) -> usize {
    let free = usize::from(cols).saturating_sub(length);
    match alignment {
        Alignment::None | Alignment::Left => 0,
        Alignment::Right => free,
        Alignment::Center => free / 2,
    }
}

/// Cells left on a `cols` wide row after column `col`
pub fn trailing_padding(col: u8, cols: u8) -> usize {
    usize::from(cols.saturating_sub(col))
}
