//! HD44780 instruction set
//!
//! Instructions are a single byte whose highest set bit selects the
//! instruction; the lower bits carry its flags (see [`flag`]).

/// Clear display, DDRAM address counter to 0
pub const CLEAR_DISPLAY: u8 = 0x01;
/// Cursor home, undo display shift
pub const RETURN_HOME: u8 = 0x02;
/// Entry mode set (text direction, autoscroll)
pub const ENTRY_MODE_SET: u8 = 0x04;
/// Display on/off, cursor, blink
pub const DISPLAY_CONTROL: u8 = 0x08;
/// Cursor or display shift
pub const CURSOR_SHIFT: u8 = 0x10;
/// Interface width, line count, font
pub const FUNCTION_SET: u8 = 0x20;
/// Set CGRAM address (glyph slot << 3)
pub const SET_CGRAM_ADDR: u8 = 0x40;
/// Set DDRAM address (cursor position)
pub const SET_DDRAM_ADDR: u8 = 0x80;

/// Flag bits for the instructions above
pub mod flag {
    // Entry mode set
    /// Text flows left to right
    pub const ENTRY_LEFT: u8 = 0x02;
    /// Shift display on each write ("right justify" from the cursor)
    pub const ENTRY_SHIFT_INCREMENT: u8 = 0x01;

    // Display control
    /// Display on
    pub const DISPLAY_ON: u8 = 0x04;
    /// Underline cursor visible
    pub const CURSOR_ON: u8 = 0x02;
    /// Blinking block cursor
    pub const BLINK_ON: u8 = 0x01;

    // Cursor shift
    /// Move the display instead of the cursor
    pub const DISPLAY_MOVE: u8 = 0x08;
    /// Shift to the right
    pub const MOVE_RIGHT: u8 = 0x04;

    // Function set
    /// 8-bit interface
    pub const MODE_8BIT: u8 = 0x10;
    /// Two display lines
    pub const LINES_2: u8 = 0x08;
    /// 5x10 dot font
    pub const DOTS_5X10: u8 = 0x04;
}

/// Power-on pattern that selects 8-bit mode (sent three times)
pub const INIT_8BIT_PATTERN: u8 = FUNCTION_SET | flag::MODE_8BIT;

/// Pattern that switches the interface to 4-bit mode
pub const INIT_4BIT_PATTERN: u8 = FUNCTION_SET;

/// Number of CGRAM glyph slots
pub const CGRAM_SLOTS: u8 = 8;

/// ROM address of the degree sign
pub const ROM_DEGREE_SIGN: u8 = 223;

/// Set-CGRAM-address instruction for a glyph slot (slot masked to 0..=7)
pub const fn cgram_address(slot: u8) -> u8 {
    SET_CGRAM_ADDR | ((slot & (CGRAM_SLOTS - 1)) << 3)
}

/// Set-DDRAM-address instruction for a raw address
pub const fn ddram_address(address: u8) -> u8 {
    SET_DDRAM_ADDR | address
}
