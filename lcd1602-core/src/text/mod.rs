//! Text handling
//!
//! Turning encoded byte strings into code points, measuring their printed
//! width, and computing alignment padding.

pub mod align;
pub mod decoder;
pub mod width;

pub use align::{leading_padding, trailing_padding, Alignment};
pub use decoder::{code_points, CodePoints};
pub use width::{display_width, symbol_count, SymbolCount};
