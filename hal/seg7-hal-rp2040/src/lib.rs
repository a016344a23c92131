//! RP2040-specific HAL for the Seg7 display engine
//!
//! This crate provides RP2040 implementations of the shared `seg7-hal`
//! traits:
//!
//! - Blocking SPI with software LSB-first ordering
//! - GPIO output for the chip-select (latch) line
//! - Millisecond clock backed by `embassy-time`
//! - Chip-select pin allocation by number

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pins;
pub mod spi;
pub mod time;

pub use gpio::RpOutput;
pub use pins::{ChipSelectPins, PinBank, PinError, SpiPins};
pub use spi::{RpSpi, SpiError};
pub use time::EmbassyClock;

// Re-export shared traits from seg7-hal for convenience
pub use seg7_hal::{BitOrder, MonotonicClock, OutputPin, SpiBus, SpiConfig};
