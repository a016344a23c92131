//! Segment bit assignments
//!
//! ```text
//!        <=A=>
//!       ^     ^
//!       F     B
//!       v<=G=>v
//!       ^     ^
//!       E     C
//!       v     v
//!        <=D=>  .DP
//! ```
//!
//! The shield shifts bytes LSB first, so segment A sits in bit 7.

/// Segment A (top)
pub const SEG_A: u8 = 0x80;
/// Segment B (top right)
pub const SEG_B: u8 = 0x40;
/// Segment C (bottom right)
pub const SEG_C: u8 = 0x20;
/// Segment D (bottom)
pub const SEG_D: u8 = 0x10;
/// Segment E (bottom left)
pub const SEG_E: u8 = 0x08;
/// Segment F (top left)
pub const SEG_F: u8 = 0x04;
/// Segment G (middle)
pub const SEG_G: u8 = 0x02;
/// Decimal point
pub const SEG_DP: u8 = 0x01;

/// All segments off
pub const BLANK: u8 = 0x00;

/// Left bar (E + F)
pub const BAR_LEFT: u8 = SEG_E | SEG_F;
/// Right bar (B + C)
pub const BAR_RIGHT: u8 = SEG_B | SEG_C;
/// Right bar with roof
pub const BAR_RIGHT_TOP: u8 = BAR_RIGHT | SEG_A;
/// Left bar with roof
pub const BAR_LEFT_TOP: u8 = BAR_LEFT | SEG_A;
/// Right bar with floor
pub const BAR_RIGHT_BOTTOM: u8 = BAR_RIGHT | SEG_D;
/// Left bar with floor
pub const BAR_LEFT_BOTTOM: u8 = BAR_LEFT | SEG_D;

