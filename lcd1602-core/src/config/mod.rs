//! Configuration types
//!
//! Display configuration, optionally stored as postcard binary data.

pub mod types;

pub use types::*;
