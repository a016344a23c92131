//! Display character buffer
//!
//! Eight character cells stored as two rows of four. Cells hold raw
//! character codes; the glyph table turns them into segment patterns at
//! refresh time.

use seg7_protocol::{DigitGroup, GROUP_LEN, MAX_DIGITS};

/// Code written to cells that have nothing to show
pub const SPACE: u8 = b' ';

/// Convert a character to a cell code
///
/// ASCII (control codes included) is stored as-is. Characters outside
/// ASCII have no segment shape and become a space.
#[inline]
pub fn cell_code(ch: char) -> u8 {
    if ch.is_ascii() {
        ch as u8
    } else {
        SPACE
    }
}

/// Fill cells left to right from `text`, padding with spaces
fn fill<'a>(cells: impl IntoIterator<Item = &'a mut u8>, text: &str) {
    let mut chars = text.chars();
    for cell in cells {
        *cell = chars.next().map_or(SPACE, cell_code);
    }
}

/// Eight-cell character buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    rows: [[u8; GROUP_LEN]; 2],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Create a buffer of spaces
    pub const fn new() -> Self {
        Self {
            rows: [[SPACE; GROUP_LEN]; 2],
        }
    }

    /// Write up to eight characters across both rows
    ///
    /// Short text is padded with spaces, long text is cut at eight.
    pub fn write_all(&mut self, text: &str) {
        fill(self.rows.iter_mut().flatten(), text);
    }

    /// Write up to four characters into one row
    pub fn write_group(&mut self, group: DigitGroup, text: &str) {
        fill(self.group_mut(group), text);
    }

    /// Blank one row
    pub fn clear_group(&mut self, group: DigitGroup) {
        *self.group_mut(group) = [SPACE; GROUP_LEN];
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.rows = [[SPACE; GROUP_LEN]; 2];
    }

    /// Cell code at a digit index (0-based)
    pub fn get(&self, digit: usize) -> Option<u8> {
        if digit >= MAX_DIGITS {
            return None;
        }
        Some(self.rows[digit / GROUP_LEN][digit % GROUP_LEN])
    }

    /// Mutable cell at a digit index (0-based)
    pub fn get_mut(&mut self, digit: usize) -> Option<&mut u8> {
        if digit >= MAX_DIGITS {
            return None;
        }
        Some(&mut self.rows[digit / GROUP_LEN][digit % GROUP_LEN])
    }

    /// Cells of one row
    #[inline]
    pub fn group(&self, group: DigitGroup) -> &[u8; GROUP_LEN] {
        &self.rows[group.index()]
    }

    /// Mutable cells of one row
    #[inline]
    pub fn group_mut(&mut self, group: DigitGroup) -> &mut [u8; GROUP_LEN] {
        &mut self.rows[group.index()]
    }

    /// All cells, digit 0 first
    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn contents(buffer: &DisplayBuffer) -> [u8; MAX_DIGITS] {
        let mut out = [0u8; MAX_DIGITS];
        for (slot, cell) in out.iter_mut().zip(buffer.cells()) {
            *slot = cell;
        }
        out
    }

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = DisplayBuffer::new();
        assert_eq!(&contents(&buffer), b"        ");
    }

    #[test]
    fn test_write_all_exact() {
        let mut buffer = DisplayBuffer::new();
        buffer.write_all("Octopart");
        assert_eq!(&contents(&buffer), b"Octopart");
        assert_eq!(buffer.group(DigitGroup::Upper), b"Octo");
        assert_eq!(buffer.group(DigitGroup::Lower), b"part");
    }

    #[test]
    fn test_write_all_pads_and_truncates() {
        let mut buffer = DisplayBuffer::new();
        buffer.write_all("Octopart");
        buffer.write_all("abc");
        assert_eq!(&contents(&buffer), b"abc     ");

        buffer.write_all("0123456789");
        assert_eq!(&contents(&buffer), b"01234567");
    }

    #[test]
    fn test_write_group_leaves_other_row() {
        let mut buffer = DisplayBuffer::new();
        buffer.write_all("Octopart");
        buffer.write_group(DigitGroup::Lower, " Crn");
        assert_eq!(&contents(&buffer), b"Octo Crn");

        buffer.write_group(DigitGroup::Upper, "Hello");
        assert_eq!(&contents(&buffer), b"Hell Crn");

        buffer.write_group(DigitGroup::Upper, "");
        assert_eq!(&contents(&buffer), b"     Crn");
    }

    #[test]
    fn test_non_ascii_becomes_space() {
        let mut buffer = DisplayBuffer::new();
        buffer.write_group(DigitGroup::Upper, "1°C");
        assert_eq!(buffer.group(DigitGroup::Upper), b"1 C ");
    }

    #[test]
    fn test_control_codes_are_kept() {
        let mut buffer = DisplayBuffer::new();
        buffer.write_group(DigitGroup::Lower, "\x0b\x0c\x0b\x0c");
        assert_eq!(buffer.group(DigitGroup::Lower), &[0x0B, 0x0C, 0x0B, 0x0C]);
    }

    #[test]
    fn test_index_access() {
        let mut buffer = DisplayBuffer::new();
        buffer.write_all("ABCDEFGH");
        assert_eq!(buffer.get(0), Some(b'A'));
        assert_eq!(buffer.get(4), Some(b'E'));
        assert_eq!(buffer.get(7), Some(b'H'));
        assert_eq!(buffer.get(8), None);

        if let Some(cell) = buffer.get_mut(5) {
            *cell = b'x';
        }
        assert_eq!(buffer.group(DigitGroup::Lower), b"ExGH");
        assert!(buffer.get_mut(8).is_none());
    }

    proptest! {
        #[test]
        fn prop_write_all_region_invariant(text in "[ -z]{0,16}") {
            let mut buffer = DisplayBuffer::new();
            buffer.write_all(&text);
            let bytes = text.as_bytes();
            for digit in 0..MAX_DIGITS {
                let expected = bytes.get(digit).copied().unwrap_or(SPACE);
                prop_assert_eq!(buffer.get(digit), Some(expected));
            }
        }

        #[test]
        fn prop_write_group_region_invariant(text in "[ -z]{0,8}", lower in any::<bool>()) {
            let group = if lower { DigitGroup::Lower } else { DigitGroup::Upper };
            let mut buffer = DisplayBuffer::new();
            buffer.write_all("########");
            buffer.write_group(group, &text);

            let bytes = text.as_bytes();
            for (i, cell) in buffer.group(group).iter().enumerate() {
                prop_assert_eq!(*cell, bytes.get(i).copied().unwrap_or(SPACE));
            }
            let other = if lower { DigitGroup::Upper } else { DigitGroup::Lower };
            prop_assert_eq!(buffer.group(other), b"####");
        }
    }
}
