//! Configuration type definitions
//!
//! [`LcdConfig`] describes one display module: where it sits on the bus,
//! its geometry and which glyph strategy it needs. With the `serde` feature
//! the configuration can be stored as postcard-serialized binary data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of rows (size of the row offset tables)
pub const MAX_ROWS: u8 = 4;

/// Maximum number of columns (DDRAM line length)
pub const MAX_COLS: u8 = 40;

/// Maximum size of a postcard-encoded [`LcdConfig`]
pub const MAX_CONFIG_SIZE: usize = 16;

/// DDRAM start address of each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowOffsets {
    /// 0x00, 0x40, 0x14, 0x54 (16x2, 20x2, 20x4 modules)
    #[default]
    Standard,
    /// 0x00, 0x40, 0x10, 0x50 (16x4 modules)
    Compact,
}

impl RowOffsets {
    /// Offset table for this layout
    pub const fn table(self) -> &'static [u8; MAX_ROWS as usize] {
        match self {
            RowOffsets::Standard => &[0x00, 0x40, 0x14, 0x54],
            RowOffsets::Compact => &[0x00, 0x40, 0x10, 0x50],
        }
    }
}

/// How extended-alphabet characters reach the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlyphVariant {
    /// Glyphs are generated into CGRAM on demand (plain LCD1602)
    #[default]
    Software,
    /// Glyphs come from the controller ROM (WH1602B-CTK)
    Rom,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Row count is zero or exceeds [`MAX_ROWS`]
    InvalidRows,
    /// Column count is zero or exceeds [`MAX_COLS`]
    InvalidCols,
    /// Binary configuration could not be encoded or decoded
    Serialize,
}

/// Display module configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// Port expander address, 8-bit form as printed on the board
    pub address: u8,
    /// Number of screen lines
    pub rows: u8,
    /// Number of columns in one line
    pub cols: u8,
    /// Row to DDRAM address layout
    pub row_offsets: RowOffsets,
    /// Extended-alphabet glyph strategy
    pub glyphs: GlyphVariant,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: 0x7E, // PCF8574A
            rows: 2,
            cols: 16,
            row_offsets: RowOffsets::Standard,
            glyphs: GlyphVariant::Software,
        }
    }
}

impl LcdConfig {
    /// 2x16 module with software glyphs at the given address
    pub const fn lcd1602(address: u8) -> Self {
        Self {
            address,
            rows: 2,
            cols: 16,
            row_offsets: RowOffsets::Standard,
            glyphs: GlyphVariant::Software,
        }
    }

    /// 2x16 module with the Cyrillic character ROM
    pub const fn wh1602b_ctk(address: u8) -> Self {
        Self {
            address,
            rows: 2,
            cols: 16,
            row_offsets: RowOffsets::Standard,
            glyphs: GlyphVariant::Rom,
        }
    }

    /// Override the geometry
    pub const fn with_geometry(mut self, rows: u8, cols: u8, row_offsets: RowOffsets) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.row_offsets = row_offsets;
        self
    }

    /// Check the geometry against the controller limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.rows > MAX_ROWS {
            return Err(ConfigError::InvalidRows);
        }
        if self.cols == 0 || self.cols > MAX_COLS {
            return Err(ConfigError::InvalidCols);
        }
        Ok(())
    }

    /// Encode as postcard binary data
    ///
    /// Returns the number of bytes written.
    #[cfg(feature = "serde")]
    pub fn to_slice(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        postcard::to_slice(self, buffer)
            .map(|used| used.len())
            .map_err(|_| ConfigError::Serialize)
    }

    /// Decode from postcard binary data and validate
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Serialize)?;
        config.validate()?;
        Ok(config)
    }
}
