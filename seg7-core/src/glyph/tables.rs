//! Built-in glyph tables
//!
//! Layout of every table: first character code, last character code, then
//! one segment pattern per character in ascending order.

use seg7_protocol::segments::{
    BAR_LEFT, BAR_LEFT_BOTTOM, BAR_LEFT_TOP, BAR_RIGHT, BAR_RIGHT_BOTTOM, BAR_RIGHT_TOP, SEG_A,
    SEG_B, SEG_C, SEG_D, SEG_DP, SEG_E, SEG_F, SEG_G,
};

/// Number of control codes with a special symbol slot
pub const SPECIAL_COUNT: usize = 32;

/// Special symbols for control codes 0x00..=0x1F
///
/// Code 0 is always blank; 0x0F and up are unassigned.
pub const SPECIAL_SYMBOLS: [u8; SPECIAL_COUNT] = [
    0x00,             // 0x00
    SEG_A,            // 0x01
    SEG_B,            // 0x02
    SEG_C,            // 0x03
    SEG_D,            // 0x04
    SEG_E,            // 0x05
    SEG_F,            // 0x06
    SEG_G,            // 0x07
    SEG_DP,           // 0x08
    BAR_LEFT,         // 0x09
    BAR_RIGHT,        // 0x0A
    BAR_RIGHT_TOP,    // 0x0B
    BAR_LEFT_TOP,     // 0x0C
    BAR_RIGHT_BOTTOM, // 0x0D
    BAR_LEFT_BOTTOM,  // 0x0E
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

/// Decimal digits '0'..='9'
pub const NUMERIC: [u8; 12] = [
    b'0', b'9', //
    0xFC, 0x60, 0xDA, 0xF2, 0x66, 0xB6, 0xBE, 0xE0, 0xFE, 0xE6,
];

/// Hexadecimal digits '0'..='F'
///
/// ':' through '@' have no sensible shape and stay blank.
pub const HEX: [u8; 25] = [
    b'0', b'F', //
    0xFC, 0x60, 0xDA, 0xF2, 0x66, 0xB6, 0xBE, 0xE0, 0xFE, 0xE6, // 0-9
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // : ; < = > ? @
    0xEE, 0x3E, 0x9C, 0x7A, 0x9E, 0x8E, // A b C d E F
];

/// Printable ASCII ' '..='z'
///
/// Letters without a seven-segment shape render blank; several others
/// borrow the nearest readable form (B as b, D as d, R as r, ...).
pub const FULL: [u8; 93] = [
    b' ', b'z', //
    // ' ' ! " # $ % & '
    0x00, 0x41, 0x44, 0x00, 0x00, 0x00, 0x00, 0x40,
    // ( ) * + , - . /
    0x9C, 0xF0, 0x00, 0x00, 0x01, 0x02, 0x01, 0x00,
    // 0-9
    0xFC, 0x60, 0xDA, 0xF2, 0x66, 0xB6, 0xBE, 0xE0, 0xFE, 0xE6,
    // : ; < = > ? @
    0x00, 0x00, 0x00, 0x12, 0x00, 0xCA, 0x00,
    // A-M
    0xEE, 0x3E, 0x9C, 0x7A, 0x9E, 0x8E, 0xBC, 0x6E, 0x60, 0x78, 0x00, 0x1C, 0x1C,
    // N-Z
    0x2A, 0xFC, 0xCE, 0x00, 0x0A, 0xB6, 0x1E, 0x7C, 0x00, 0x3C, 0x00, 0x76, 0x00,
    // [ \ ] ^ _ `
    0x00, 0x00, 0x00, 0x00, 0x10, 0x00,
    // a-m
    0xFA, 0x3E, 0x1A, 0x7A, 0xDE, 0x8E, 0xF6, 0x2E, 0x20, 0x78, 0x00, 0x1C, 0x0A,
    // n-z
    0x2A, 0x3A, 0xCE, 0xEA, 0x0A, 0xB6, 0x1E, 0x38, 0x00, 0x00, 0x00, 0x76, 0x00,
];
