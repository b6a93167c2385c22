//! Bounded formatted printing

use core::fmt::{self, Write};

use heapless::String;

/// Capacity of the formatting buffer in bytes
pub const FORMAT_CAPACITY: usize = 128;

/// Outcome of a formatted print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fit {
    /// The whole text was printed
    Complete,
    /// The text exceeded the buffer; only the leading part was printed
    Truncated,
}

/// Fixed-capacity text sink that keeps the longest prefix that fits
///
/// Cuts only on `char` boundaries.
#[derive(Debug, Default)]
pub struct Truncating<const N: usize> {
    buf: String<N>,
    truncated: bool,
}

impl<const N: usize> Truncating<N> {
    /// Empty buffer
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            truncated: false,
        }
    }

    /// Format `args`, dropping whatever does not fit
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let mut out = Self::new();
        // write_str never fails; an error can only come from a Display impl
        if out.write_fmt(args).is_err() {
            out.truncated = true;
        }
        out
    }

    /// Text collected so far
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Whether the formatted text fit
    pub fn fit(&self) -> Fit {
        if self.truncated {
            Fit::Truncated
        } else {
            Fit::Complete
        }
    }
}

impl<const N: usize> Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        if self.buf.push_str(s).is_ok() {
            return Ok(());
        }

        self.truncated = true;
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}
