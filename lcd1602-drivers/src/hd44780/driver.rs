//! HD44780 display driver
//!
//! [`Lcd`] combines the protocol engine, the mirrored display state and a
//! glyph resolver. Text goes through three stages:
//!
//! 1. Decode the encoded bytes into code points
//! 2. Resolve each code point to a ROM code, a resident CGRAM slot, or a
//!    glyph that has to be programmed first
//! 3. Send the data bytes and advance the tracked cursor
//!
//! Programming a glyph moves the controller's address pointer into CGRAM, so
//! the driver re-asserts the saved cursor position before printing the slot.
//!
//! The driver itself is not synchronized. Drive one instance from one
//! context; the bus it borrows may be shared by many instances.

use core::fmt;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use lcd1602_core::cmd::{self, flag};
use lcd1602_core::glyph::{AnyGlyphs, Bitmap, GlyphResolver, Renderable, RomGlyphs, SoftwareGlyphs};
use lcd1602_core::text::{code_points, display_width, leading_padding, trailing_padding, Alignment};
use lcd1602_core::traits::CharacterDisplay;
use lcd1602_core::{ConfigError, Cursor, DisplayState, LcdConfig};
use lcd1602_hal::{BusError, DeviceAddress, SharedBus};

use super::engine::{InitSequence, ProtocolEngine};
use super::format::{Fit, Truncating, FORMAT_CAPACITY};

/// Character display on a PCF8574 backpack
pub struct Lcd<'bus, M: RawMutex, I2C, D, R = AnyGlyphs> {
    engine: ProtocolEngine<'bus, M, I2C, D>,
    state: DisplayState,
    glyphs: R,
}

/// Plain LCD1602 with CGRAM-generated Cyrillic
pub type SoftwareLcd<'bus, M, I2C, D> = Lcd<'bus, M, I2C, D, SoftwareGlyphs>;

/// WH1602B-CTK with the Cyrillic character ROM
pub type RomLcd<'bus, M, I2C, D> = Lcd<'bus, M, I2C, D, RomGlyphs>;

impl<'bus, M, I2C, D> Lcd<'bus, M, I2C, D, AnyGlyphs>
where
    M: RawMutex,
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver with the glyph strategy named in the configuration
    pub fn from_config(
        bus: &'bus SharedBus<M, I2C>,
        delay: D,
        config: &LcdConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(bus, delay, config, AnyGlyphs::new(config.glyphs))
    }
}

impl<'bus, M, I2C, D, R> Lcd<'bus, M, I2C, D, R>
where
    M: RawMutex,
    I2C: I2c,
    D: DelayNs,
    R: GlyphResolver,
{
    /// Create a driver; the display is not touched until [`Lcd::init`]
    pub fn new(
        bus: &'bus SharedBus<M, I2C>,
        delay: D,
        config: &LcdConfig,
        glyphs: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            engine: ProtocolEngine::new(bus, DeviceAddress::from_8bit(config.address), delay),
            state: DisplayState::new(config),
            glyphs,
        })
    }

    /// Release the delay provider and the glyph resolver
    pub fn release(self) -> (D, R) {
        (self.engine.release(), self.glyphs)
    }

    // ========== Setup ==========

    /// Power-on initialization
    ///
    /// Leaves the display on with backlight, no cursor, no blink,
    /// left-to-right entry, cleared, and all generated glyphs forgotten.
    pub fn init(&mut self) -> Result<(), BusError> {
        self.glyphs.reset();
        self.state.home();
        self.engine.set_backlight(true);

        let sequence = InitSequence {
            function_set: self.state.function_set(),
            display_control: self.state.set_control(true, false, false),
            entry_mode: self.state.reset_entry_mode(),
        };
        self.engine.init(sequence)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "lcd {=u8:#x}: ready ({=u8}x{=u8})",
            self.engine.address().get(),
            self.state.rows(),
            self.state.cols()
        );
        Ok(())
    }

    /// Device address
    pub fn address(&self) -> DeviceAddress {
        self.engine.address()
    }

    /// Talk to a different device on the same bus
    pub fn set_address(&mut self, address: DeviceAddress) {
        self.engine.set_address(address);
    }

    // ========== Screen control ==========

    /// Clear the screen; cursor to the origin
    pub fn clear(&mut self) -> Result<(), BusError> {
        self.engine.clear()?;
        self.state.home();
        Ok(())
    }

    /// Cursor to the origin and undo display shifts
    pub fn home(&mut self) -> Result<(), BusError> {
        self.engine.home()?;
        self.state.home();
        Ok(())
    }

    /// Set backlight, cursor and blink
    ///
    /// Switching the backlight off also blanks the display.
    pub fn control(&mut self, backlight: bool, cursor: bool, blink: bool) -> Result<(), BusError> {
        let command = self.state.set_control(backlight, cursor, blink);
        self.engine.set_backlight(backlight);
        self.engine.send_command(command)
    }

    /// Current `(backlight, cursor, blink)`
    pub fn control_state(&self) -> (bool, bool, bool) {
        let (_, cursor, blink) = self.state.control();
        (self.state.backlight(), cursor, blink)
    }

    /// Switch the backlight, keeping cursor and blink
    pub fn set_backlight(&mut self, on: bool) -> Result<(), BusError> {
        let (_, cursor, blink) = self.control_state();
        self.control(on, cursor, blink)
    }

    /// Shift the whole display one cell left (DDRAM unchanged)
    pub fn scroll_left(&mut self) -> Result<(), BusError> {
        self.engine.send_command(cmd::CURSOR_SHIFT | flag::DISPLAY_MOVE)
    }

    /// Shift the whole display one cell right (DDRAM unchanged)
    pub fn scroll_right(&mut self) -> Result<(), BusError> {
        self.engine
            .send_command(cmd::CURSOR_SHIFT | flag::DISPLAY_MOVE | flag::MOVE_RIGHT)
    }

    /// Text direction
    pub fn set_left_to_right(&mut self, on: bool) -> Result<(), BusError> {
        let command = self.state.set_left_to_right(on);
        self.engine.send_command(command)
    }

    /// Shift the display with every printed character
    pub fn set_autoscroll(&mut self, on: bool) -> Result<(), BusError> {
        let command = self.state.set_autoscroll(on);
        self.engine.send_command(command)
    }

    /// Move the cursor; rows past the last one are clamped
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), BusError> {
        let command = self.state.move_cursor(row, col);
        self.engine.send_command(command)
    }

    // ========== Printing ==========

    /// Print one raw character code
    pub fn print_char(&mut self, code: u8) -> Result<(), BusError> {
        self.engine.send_data(code)?;
        self.state.advance();
        Ok(())
    }

    /// Print one decoded code point through the glyph resolver
    pub fn print_code_point(&mut self, code_point: u32) -> Result<(), BusError> {
        match self.glyphs.resolve(code_point) {
            Renderable::Code(code) => self.print_char(code),
            Renderable::Slot(slot) => self.print_char(slot),
            Renderable::Program {
                code_point,
                slot,
                bitmap,
            } => {
                #[cfg(feature = "defmt")]
                defmt::debug!("glyph {=u32:#x} -> slot {=u8}", code_point, slot);

                self.create_glyph(slot, bitmap)?;
                self.glyphs.glyph_programmed(code_point);
                self.print_char(slot)
            }
        }
    }

    /// Print text with leading alignment padding
    ///
    /// Width is counted in symbols, so each Cyrillic letter counts once.
    pub fn print(&mut self, text: &str, alignment: Alignment) -> Result<(), BusError> {
        self.align(display_width(text.as_bytes()), alignment)?;
        self.print_extended(text)
    }

    /// Print text at the cursor, no alignment
    pub fn print_extended(&mut self, text: &str) -> Result<(), BusError> {
        self.print_bytes(text.as_bytes())
    }

    /// Print encoded bytes at the cursor
    ///
    /// Malformed sequences never fail; their bytes print as raw codes.
    pub fn print_bytes(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        for code_point in code_points(bytes) {
            self.print_code_point(code_point)?;
        }
        Ok(())
    }

    /// Print text, then fill the rest of the row with `pad`
    pub fn print_with_padding(&mut self, text: &str, pad: u8) -> Result<(), BusError> {
        self.print_extended(text)?;
        let fill = trailing_padding(self.state.cursor().col, self.state.cols());
        for _ in 0..fill {
            self.print_char(pad)?;
        }
        Ok(())
    }

    /// Print formatted text
    ///
    /// Formats into a fixed buffer first; text that does not fit is cut and
    /// the printed prefix is reported as [`Fit::Truncated`].
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<Fit, BusError> {
        let text = Truncating::<FORMAT_CAPACITY>::format(args);
        self.print_extended(text.as_str())?;

        #[cfg(feature = "defmt")]
        if text.fit() == Fit::Truncated {
            defmt::warn!("formatted text truncated to {=usize} bytes", FORMAT_CAPACITY);
        }
        Ok(text.fit())
    }

    /// Print the spaces that align text of `length` symbols on the row
    pub fn align(&mut self, length: usize, alignment: Alignment) -> Result<(), BusError> {
        for _ in 0..leading_padding(length, self.state.cols(), alignment) {
            self.print_char(b' ')?;
        }
        Ok(())
    }

    // ========== Custom glyphs ==========

    /// Write a glyph bitmap into a CGRAM slot (`location` masked to 0..=7)
    ///
    /// The cursor is restored afterwards. Slots used by the software glyph
    /// cache may be overwritten by the next generated glyph.
    pub fn create_glyph(&mut self, location: u8, bitmap: &Bitmap) -> Result<(), BusError> {
        let saved = self.state.cursor();
        self.engine.send_command(cmd::cgram_address(location))?;
        for &row in bitmap {
            self.engine.send_data(row)?;
        }
        self.set_cursor(saved.row, saved.col)
    }

    /// Print the glyph in a CGRAM slot (`location` masked to 0..=7)
    pub fn print_glyph(&mut self, location: u8) -> Result<(), BusError> {
        self.print_char(location & (cmd::CGRAM_SLOTS - 1))
    }

    // ========== State ==========

    /// Cursor position as tracked by the driver
    pub fn cursor(&self) -> Cursor {
        self.state.cursor()
    }

    /// Current row
    pub fn row(&self) -> u8 {
        self.state.cursor().row
    }

    /// Current column
    pub fn col(&self) -> u8 {
        self.state.cursor().col
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        self.state.rows()
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.state.cols()
    }

    /// `(left_to_right, autoscroll)`
    pub fn entry_mode(&self) -> (bool, bool) {
        self.state.entry_mode()
    }

    /// Mirrored controller state
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Glyph resolver
    pub fn glyphs(&self) -> &R {
        &self.glyphs
    }
}

impl<M, I2C, D, R> CharacterDisplay for Lcd<'_, M, I2C, D, R>
where
    M: RawMutex,
    I2C: I2c,
    D: DelayNs,
    R: GlyphResolver,
{
    type Error = BusError;

    fn clear(&mut self) -> Result<(), BusError> {
        Lcd::clear(self)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), BusError> {
        Lcd::set_cursor(self, row, col)
    }

    fn print_char(&mut self, code: u8) -> Result<(), BusError> {
        Lcd::print_char(self, code)
    }

    fn print(&mut self, text: &str, alignment: Alignment) -> Result<(), BusError> {
        Lcd::print(self, text, alignment)
    }

    fn print_with_padding(&mut self, text: &str, pad: u8) -> Result<(), BusError> {
        Lcd::print_with_padding(self, text, pad)
    }

    fn rows(&self) -> u8 {
        Lcd::rows(self)
    }

    fn cols(&self) -> u8 {
        Lcd::cols(self)
    }
}
