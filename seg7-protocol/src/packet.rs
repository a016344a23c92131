//! Per-digit packet encoding
//!
//! Packet format (16-bit word):
//! - bits 15..8: segment pattern (A in bit 15, DP in bit 8)
//! - bits 7..0: one-hot digit select (digit 0 in bit 7)
//!
//! On the wire the low byte goes out first.

use crate::digits::{DecimalPoints, DigitMask, MAX_DIGITS};
use crate::segments::{BLANK, SEG_DP};

/// Packet length on the wire
pub const PACKET_LEN: usize = 2;

/// One digit update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Segment pattern to light
    segments: u8,
    /// One-hot digit select
    select: u8,
}

impl Packet {
    /// Create a packet lighting `segments` on `digit`
    ///
    /// Returns `None` for digits past the last position.
    pub const fn new(digit: usize, segments: u8) -> Option<Self> {
        if digit >= MAX_DIGITS {
            return None;
        }
        Some(Self {
            segments,
            select: DigitMask::bit(digit),
        })
    }

    /// Create a packet for `digit`, adding its decimal point if set
    pub const fn with_decimal_point(digit: usize, segments: u8, points: DecimalPoints) -> Option<Self> {
        let segments = if points.contains(digit) {
            segments | SEG_DP
        } else {
            segments
        };
        Self::new(digit, segments)
    }

    /// Create a packet that turns every segment of `digit` off
    pub const fn blank(digit: usize) -> Option<Self> {
        Self::new(digit, BLANK)
    }

    /// Decode a 16-bit word
    ///
    /// Returns `None` unless exactly one select bit is set.
    pub const fn from_word(word: u16) -> Option<Self> {
        let select = (word & 0x00FF) as u8;
        if select.count_ones() != 1 {
            return None;
        }
        Some(Self {
            segments: (word >> 8) as u8,
            select,
        })
    }

    /// Decode wire bytes (low byte first)
    pub const fn from_bytes(bytes: [u8; PACKET_LEN]) -> Option<Self> {
        Self::from_word(u16::from_le_bytes(bytes))
    }

    /// Segment pattern
    #[inline]
    pub const fn segments(&self) -> u8 {
        self.segments
    }

    /// One-hot select byte
    #[inline]
    pub const fn select(&self) -> u8 {
        self.select
    }

    /// Digit index addressed by this packet
    #[inline]
    pub const fn digit(&self) -> usize {
        self.select.leading_zeros() as usize
    }

    /// Check whether all segments are off
    #[inline]
    pub const fn is_blank(&self) -> bool {
        self.segments == BLANK
    }

    /// 16-bit protocol word
    #[inline]
    pub const fn word(&self) -> u16 {
        ((self.segments as u16) << 8) | self.select as u16
    }

    /// Wire bytes, low byte first
    #[inline]
    pub const fn to_bytes(&self) -> [u8; PACKET_LEN] {
        self.word().to_le_bytes()
    }
}
