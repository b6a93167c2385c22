//! Display abstraction traits
//!
//! These traits define the interface between text layout code and a
//! concrete character display driver.

pub mod display;

pub use display::{CharacterDisplay, DisplayExt};
