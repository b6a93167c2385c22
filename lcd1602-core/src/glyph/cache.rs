//! CGRAM glyph cache
//!
//! The controller has eight user-definable glyph slots and no way to report
//! which of them are still visible. Slots are therefore handed out in order
//! and, once all eight are taken, the next allocation flushes every mapping
//! and starts again at slot 0. Glyphs still on screen from before a flush
//! show whatever is programmed into their slot next; clear the display
//! before printing more than eight distinct generated glyphs.
//!
//! Allocation is split in two steps so a failed CGRAM write never leaves a
//! mapping to an unprogrammed slot:
//!
//! 1. [`GlyphCache::reserve`] - pick the slot (flushing if full)
//! 2. [`GlyphCache::commit`] - record the mapping after the write succeeded

use heapless::LinearMap;

use crate::cmd::CGRAM_SLOTS;

const CAPACITY: usize = CGRAM_SLOTS as usize;

/// Code point to CGRAM slot mapping with full-flush eviction
#[derive(Debug, Clone, Default)]
pub struct GlyphCache {
    entries: LinearMap<u32, u8, CAPACITY>,
    next_slot: u8,
    flushes: u32,
}

impl GlyphCache {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self {
            entries: LinearMap::new(),
            next_slot: 0,
            flushes: 0,
        }
    }

    /// Slot holding `code_point`, if resident
    pub fn lookup(&self, code_point: u32) -> Option<u8> {
        self.entries.get(&code_point).copied()
    }

    /// Slot the next glyph will be programmed into
    ///
    /// Flushes the cache first when all slots are in use.
    pub fn reserve(&mut self) -> u8 {
        if self.is_full() {
            #[cfg(feature = "defmt")]
            defmt::debug!("glyph cache full, flushing {=usize} glyphs", self.len());
            self.flush();
            self.flushes = self.flushes.wrapping_add(1);
        }
        self.next_slot
    }

    /// Record `code_point` in the reserved slot and advance
    ///
    /// Returns the slot. A code point that is already resident keeps its slot.
    pub fn commit(&mut self, code_point: u32) -> u8 {
        if let Some(slot) = self.lookup(code_point) {
            return slot;
        }
        let slot = self.reserve();
        // reserve() guarantees a free entry
        let _ = self.entries.insert(code_point, slot);
        self.next_slot = slot + 1;
        slot
    }

    /// Forget every mapping and restart at slot 0
    pub fn flush(&mut self) {
        self.entries.clear();
        self.next_slot = 0;
    }

    /// Number of resident glyphs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No glyph resident
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All slots in use
    pub fn is_full(&self) -> bool {
        self.next_slot >= CGRAM_SLOTS
    }

    /// Slot counter, `0..=8`
    pub fn next_slot(&self) -> u8 {
        self.next_slot
    }

    /// Number of full flushes caused by exhaustion
    pub fn flushes(&self) -> u32 {
        self.flushes
    }
}
