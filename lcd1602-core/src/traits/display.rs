//! Character display trait

use crate::text::{display_width, Alignment};

/// Trait for character-cell displays
///
/// Positions are in cells. Text is encoded; extended-alphabet characters
/// occupy one cell each.
pub trait CharacterDisplay {
    /// Error reported by the underlying transport
    type Error;

    /// Clear the screen and move the cursor home
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor
    ///
    /// - `row`: clamped to the last row
    /// - `col`: not clamped
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error>;

    /// Print one raw character code at the cursor
    fn print_char(&mut self, code: u8) -> Result<(), Self::Error>;

    /// Print text at the cursor with leading alignment padding
    fn print(&mut self, text: &str, alignment: Alignment) -> Result<(), Self::Error>;

    /// Print text, then fill the rest of the row with `pad`
    fn print_with_padding(&mut self, text: &str, pad: u8) -> Result<(), Self::Error>;

    /// Number of rows
    fn rows(&self) -> u8;

    /// Number of columns
    fn cols(&self) -> u8;
}

/// Helper trait for common row layouts
pub trait DisplayExt: CharacterDisplay {
    /// Replace a whole row with aligned text
    fn print_line(&mut self, row: u8, text: &str, alignment: Alignment) -> Result<(), Self::Error> {
        self.set_cursor(row, 0)?;
        self.print(text, alignment)?;
        self.print_with_padding("", b' ')
    }

    /// Draw a label-value pair
    ///
    /// Format: `Label:     Value`, value flush with the last column. When the
    /// two do not fit, the value follows the colon directly.
    fn print_field(&mut self, row: u8, label: &str, value: &str) -> Result<(), Self::Error> {
        let used = display_width(label.as_bytes()) + 1 + display_width(value.as_bytes());
        let gap = usize::from(self.cols()).saturating_sub(used);

        self.set_cursor(row, 0)?;
        self.print(label, Alignment::None)?;
        self.print_char(b':')?;
        for _ in 0..gap {
            self.print_char(b' ')?;
        }
        self.print_with_padding(value, b' ')
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> DisplayExt for T {}
