//! Display state tracking
//!
//! The controller cannot be read back through the backpack, so the driver
//! mirrors the cursor position and mode registers here. Every mutator
//! returns the instruction byte that makes the hardware match.

use crate::cmd::{self, flag};
use crate::config::{LcdConfig, RowOffsets};

/// Cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Row, `0..rows`
    pub row: u8,
    /// Column, not clamped against the row length
    pub col: u8,
}

/// Mirror of the controller's cursor and mode registers
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    rows: u8,
    cols: u8,
    row_offsets: RowOffsets,
    backlight: bool,
    function: u8,
    control: u8,
    mode: u8,
    cursor: Cursor,
}

impl DisplayState {
    /// Fresh state for the configured geometry (backlight on, all else off)
    pub fn new(config: &LcdConfig) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            row_offsets: config.row_offsets,
            backlight: true,
            function: flag::LINES_2,
            control: 0,
            mode: 0,
            cursor: Cursor::default(),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Backlight state
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Function set instruction: 4-bit interface, 2 lines, 5x8 font
    pub fn function_set(&self) -> u8 {
        cmd::FUNCTION_SET | self.function
    }

    /// Update backlight, cursor and blink; returns the display control instruction
    ///
    /// The display itself is switched off together with the backlight.
    pub fn set_control(&mut self, backlight: bool, cursor: bool, blink: bool) -> u8 {
        self.backlight = backlight;
        set_flag(&mut self.control, flag::DISPLAY_ON, backlight);
        set_flag(&mut self.control, flag::CURSOR_ON, cursor);
        set_flag(&mut self.control, flag::BLINK_ON, blink);
        cmd::DISPLAY_CONTROL | self.control
    }

    /// Current `(display, cursor, blink)` flags
    pub fn control(&self) -> (bool, bool, bool) {
        (
            self.control & flag::DISPLAY_ON != 0,
            self.control & flag::CURSOR_ON != 0,
            self.control & flag::BLINK_ON != 0,
        )
    }

    /// Left-to-right, no autoscroll; returns the entry mode instruction
    pub fn reset_entry_mode(&mut self) -> u8 {
        self.mode = flag::ENTRY_LEFT;
        cmd::ENTRY_MODE_SET | self.mode
    }

    /// Set text direction; returns the entry mode instruction
    pub fn set_left_to_right(&mut self, on: bool) -> u8 {
        set_flag(&mut self.mode, flag::ENTRY_LEFT, on);
        cmd::ENTRY_MODE_SET | self.mode
    }

    /// Set autoscroll; returns the entry mode instruction
    pub fn set_autoscroll(&mut self, on: bool) -> u8 {
        set_flag(&mut self.mode, flag::ENTRY_SHIFT_INCREMENT, on);
        cmd::ENTRY_MODE_SET | self.mode
    }

    /// Current `(left_to_right, autoscroll)` flags
    pub fn entry_mode(&self) -> (bool, bool) {
        (
            self.mode & flag::ENTRY_LEFT != 0,
            self.mode & flag::ENTRY_SHIFT_INCREMENT != 0,
        )
    }

    /// Clamp a requested row to the last valid row
    pub fn clamp_row(&self, row: u8) -> u8 {
        if row >= self.rows {
            self.rows.saturating_sub(1)
        } else {
            row
        }
    }

    /// DDRAM address of a cell (row clamped)
    pub fn ddram_address(&self, row: u8, col: u8) -> u8 {
        let offsets = self.row_offsets.table();
        let offset = offsets
            .get(usize::from(self.clamp_row(row)))
            .copied()
            .unwrap_or(0);
        col.wrapping_add(offset)
    }

    /// Move the cursor; returns the set DDRAM address instruction
    pub fn move_cursor(&mut self, row: u8, col: u8) -> u8 {
        let address = self.ddram_address(row, col);
        self.cursor = Cursor {
            row: self.clamp_row(row),
            col,
        };
        cmd::ddram_address(address)
    }

    /// Cursor back to the origin (after clear or return home)
    pub fn home(&mut self) {
        self.cursor = Cursor::default();
    }

    /// Account for one printed cell
    pub fn advance(&mut self) {
        self.cursor.col = self.cursor.col.saturating_add(1);
    }
}

fn set_flag(register: &mut u8, bit: u8, on: bool) {
    if on {
        *register |= bit;
    } else {
        *register &= !bit;
    }
}
