//! Board-agnostic core logic for the seven-segment display engine
//!
//! This crate contains all display state that does not depend on
//! specific hardware:
//!
//! - Glyph tables (character → segment pattern)
//! - Display buffer (eight character cells, two rows)
//! - Blink controller (per-digit on/off timing)
//! - Scroll controller (one per row)
//! - Configuration and error types
//!
//! Time is always passed in as milliseconds from a monotonic clock; nothing
//! here reads a clock on its own.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod blink;
pub mod buffer;
pub mod config;
pub mod error;
pub mod glyph;
pub mod scroll;

pub use blink::{BlinkController, BlinkState};
pub use buffer::DisplayBuffer;
pub use config::{DisplayConfig, GlyphSet};
pub use error::{ConfigError, DisplayError};
pub use glyph::{GlyphTable, GlyphTableError};
pub use scroll::{ScrollController, ScrollDirection};
