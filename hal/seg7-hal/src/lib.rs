//! Seg7 Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display engine talks to.
//! Chip-specific HALs (RP2040 today) implement them, so the same
//! refresh engine runs on real hardware and against host-side mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  seg7-drivers (refresh engine)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  seg7-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ seg7-hal-     │       │  test mocks   │
//! │    rp2040     │       │  (host)       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip-select (latch) output
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`time::MonotonicClock`] - Millisecond time source

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{BitOrder, SpiBus, SpiConfig};
pub use time::MonotonicClock;
