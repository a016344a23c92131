//! Seg7 display shield wire format
//!
//! This crate defines the bit-exact layouts shared by the refresh engine
//! and the shift-register shield: one 16-bit word per digit, sent low
//! byte first.
//!
//! # Packet Overview
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────┐
//! │ HIGH BYTE: segments      │ LOW BYTE: digit select   │
//! │ A B C D E F G DP         │ one-hot, bit7 = digit 0  │
//! │ 7 6 5 4 3 2 1 0          │ 7 6 5 4 3 2 1 0          │
//! └──────────────────────────┴──────────────────────────┘
//! ```
//!
//! Digits 0..=3 form the upper row, 4..=7 the lower row. Every mask that
//! addresses digits (select, decimal points, blink) uses the same
//! bit7-first mapping.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod digits;
pub mod packet;
pub mod segments;

pub use digits::{DecimalPoints, DigitGroup, DigitGroups, DigitMask, GROUP_LEN, MAX_DIGITS};
pub use packet::Packet;
