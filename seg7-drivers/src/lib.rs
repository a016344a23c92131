//! Display driver for Seg7
//!
//! This crate ties the board-agnostic state in seg7-core to the HAL
//! traits in seg7-hal:
//!
//! - `Seg7Display`: the public display API and refresh engine
//! - `embedded`: adapters for any `embedded-hal` 1.0 SPI bus and pin

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod embedded;

pub use display::{RefreshReport, Seg7Display};
pub use embedded::{EmbeddedPin, EmbeddedSpi};
