//! Character to segment-pattern lookup
//!
//! A glyph table covers one contiguous character range. Control codes
//! below 0x20 that the table does not cover fall back to the special
//! symbol table; anything else renders blank.

pub mod tables;

use seg7_protocol::segments::BLANK;

use tables::{SPECIAL_COUNT, SPECIAL_SYMBOLS};

/// Bytes before the first pattern (first code, last code)
const HEADER_LEN: usize = 2;

/// Errors found while validating glyph table bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphTableError {
    /// Fewer bytes than the two-byte header
    TooShort,
    /// Last character code is below the first
    InvertedRange,
    /// Pattern count does not match the declared range
    LengthMismatch,
}

/// Validated glyph table
///
/// Wraps the raw table bytes without copying them, so the external layout
/// (`[first, last, patterns...]`) is exactly what the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    bytes: &'static [u8],
}

impl GlyphTable {
    /// Digits only
    pub const NUMERIC: Self = Self::builtin(&tables::NUMERIC);
    /// Hexadecimal digits
    pub const HEX: Self = Self::builtin(&tables::HEX);
    /// Printable ASCII from space to 'z'
    pub const FULL: Self = Self::builtin(&tables::FULL);

    /// Validate raw table bytes
    pub const fn from_bytes(bytes: &'static [u8]) -> Result<Self, GlyphTableError> {
        if bytes.len() < HEADER_LEN {
            return Err(GlyphTableError::TooShort);
        }
        let first = bytes[0];
        let last = bytes[1];
        if last < first {
            return Err(GlyphTableError::InvertedRange);
        }
        let span = (last - first) as usize + 1;
        if bytes.len() != HEADER_LEN + span {
            return Err(GlyphTableError::LengthMismatch);
        }
        Ok(Self { bytes })
    }

    /// Built-in tables are checked at compile time
    const fn builtin(bytes: &'static [u8]) -> Self {
        match Self::from_bytes(bytes) {
            Ok(table) => table,
            Err(_) => panic!("malformed built-in glyph table"),
        }
    }

    /// First character code covered
    #[inline]
    pub const fn first(&self) -> u8 {
        self.bytes[0]
    }

    /// Last character code covered
    #[inline]
    pub const fn last(&self) -> u8 {
        self.bytes[1]
    }

    /// Check whether a character code falls in the declared range
    #[inline]
    pub const fn covers(&self, ch: u8) -> bool {
        ch >= self.first() && ch <= self.last()
    }

    /// Raw table bytes, header included
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Pattern stored for a character in range
    pub fn pattern(&self, ch: u8) -> Option<u8> {
        if !self.covers(ch) {
            return None;
        }
        self.bytes
            .get(HEADER_LEN + (ch - self.first()) as usize)
            .copied()
    }

    /// Segment pattern for any character code
    ///
    /// Table range first, then the special symbols for control codes,
    /// otherwise blank.
    pub fn decode(&self, ch: u8) -> u8 {
        if let Some(pattern) = self.pattern(ch) {
            return pattern;
        }
        special_symbol(ch).unwrap_or(BLANK)
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::FULL
    }
}

/// Special symbol for a control code (0x00..=0x1F)
pub fn special_symbol(ch: u8) -> Option<u8> {
    if (ch as usize) < SPECIAL_COUNT {
        Some(SPECIAL_SYMBOLS[ch as usize])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use seg7_protocol::segments::{BAR_LEFT_BOTTOM, SEG_A};

    static SHORT: [u8; 1] = [0x30];
    static INVERTED: [u8; 3] = [0x39, 0x30, 0x00];
    static TRUNCATED: [u8; 4] = [0x30, 0x39, 0xFC, 0x60];
    static CUSTOM: [u8; 5] = [0x05, 0x07, 0xAA, 0xBB, 0xCC];

    #[test]
    fn test_builtin_ranges() {
        assert_eq!(GlyphTable::NUMERIC.first(), b'0');
        assert_eq!(GlyphTable::NUMERIC.last(), b'9');
        assert_eq!(GlyphTable::HEX.last(), b'F');
        assert_eq!(GlyphTable::FULL.first(), b' ');
        assert_eq!(GlyphTable::FULL.last(), b'z');
    }

    #[test]
    fn test_first_character_is_covered() {
        assert_eq!(GlyphTable::NUMERIC.decode(b'0'), 0xFC);
        assert_eq!(GlyphTable::HEX.decode(b'0'), 0xFC);
        assert_eq!(GlyphTable::FULL.decode(b' '), 0x00);
    }

    #[test]
    fn test_known_glyphs() {
        let full = GlyphTable::FULL;
        assert_eq!(full.decode(b'8'), 0xFE);
        assert_eq!(full.decode(b'A'), 0xEE);
        assert_eq!(full.decode(b'-'), 0x02);
        assert_eq!(full.decode(b'_'), 0x10);
        assert_eq!(full.decode(b'z'), 0x00);
        assert_eq!(GlyphTable::HEX.decode(b'F'), 0x8E);
    }

    #[test]
    fn test_outside_range_is_blank() {
        assert_eq!(GlyphTable::NUMERIC.decode(b'A'), 0);
        assert_eq!(GlyphTable::HEX.decode(b'a'), 0);
        assert_eq!(GlyphTable::FULL.decode(b'{'), 0);
        assert_eq!(GlyphTable::FULL.decode(0xFF), 0);
    }

    #[test]
    fn test_special_symbols() {
        let table = GlyphTable::NUMERIC;
        assert_eq!(table.decode(0x00), 0);
        assert_eq!(table.decode(0x01), SEG_A);
        assert_eq!(table.decode(0x0E), BAR_LEFT_BOTTOM);
        assert_eq!(table.decode(0x1F), 0);
    }

    #[test]
    fn test_table_range_wins_over_special_symbols() {
        let table = GlyphTable::from_bytes(&CUSTOM).unwrap();
        assert_eq!(table.decode(0x05), 0xAA);
        assert_eq!(table.decode(0x07), 0xCC);
        // Outside the custom range, control codes still map
        assert_eq!(table.decode(0x01), SEG_A);
    }

    #[test]
    fn test_malformed_tables() {
        assert_eq!(GlyphTable::from_bytes(&SHORT), Err(GlyphTableError::TooShort));
        assert_eq!(
            GlyphTable::from_bytes(&INVERTED),
            Err(GlyphTableError::InvertedRange)
        );
        assert_eq!(
            GlyphTable::from_bytes(&TRUNCATED),
            Err(GlyphTableError::LengthMismatch)
        );
    }

    proptest! {
        #[test]
        fn prop_in_range_reads_stored_byte(ch in b' '..=b'z') {
            let table = GlyphTable::FULL;
            let expected = tables::FULL[2 + (ch - b' ') as usize];
            prop_assert_eq!(table.decode(ch), expected);
        }

        #[test]
        fn prop_outside_everything_is_blank(ch in any::<u8>()) {
            let table = GlyphTable::NUMERIC;
            prop_assume!(!table.covers(ch) && ch >= 32);
            prop_assert_eq!(table.decode(ch), 0);
        }

        #[test]
        fn prop_control_codes_use_special_table(ch in 0u8..32) {
            prop_assert_eq!(GlyphTable::HEX.decode(ch), SPECIAL_SYMBOLS[ch as usize]);
        }
    }
}
