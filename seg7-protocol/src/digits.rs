//! Digit addressing
//!
//! Digits are addressed by plain indexes (0 = upper-left, 7 = lower-right)
//! inside the engine. The one-hot masks below only exist where a byte
//! crosses the wire or a caller hands in a raw bitmask.

use core::ops::BitOr;

/// Number of digit positions on the shield
pub const MAX_DIGITS: usize = 8;

/// Digits per row
pub const GROUP_LEN: usize = 4;

/// One row of four digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitGroup {
    /// Digits 0..=3
    Upper,
    /// Digits 4..=7
    Lower,
}

impl DigitGroup {
    /// Both groups, upper first
    pub const ALL: [DigitGroup; 2] = [DigitGroup::Upper, DigitGroup::Lower];

    /// Position of this group in `ALL`
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            DigitGroup::Upper => 0,
            DigitGroup::Lower => 1,
        }
    }

    /// Index of the leftmost digit in this group
    #[inline]
    pub const fn first_digit(self) -> usize {
        self.index() * GROUP_LEN
    }

    /// Group containing a digit, if the index is on the shield
    pub const fn of_digit(digit: usize) -> Option<Self> {
        match digit {
            0..=3 => Some(DigitGroup::Upper),
            4..=7 => Some(DigitGroup::Lower),
            _ => None,
        }
    }

    /// Group selection bit (upper = 0x01, lower = 0x02)
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            DigitGroup::Upper => 0x01,
            DigitGroup::Lower => 0x02,
        }
    }
}

/// Set of digit groups
///
/// Raw layout: bit0 = upper, bit1 = lower. Other bits are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitGroups(u8);

impl DigitGroups {
    /// No group
    pub const NONE: Self = Self(0);
    /// Upper row only
    pub const UPPER: Self = Self(0x01);
    /// Lower row only
    pub const LOWER: Self = Self(0x02);
    /// Both rows
    pub const BOTH: Self = Self(0x03);

    /// Build from raw bits, dropping reserved bits
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::BOTH.0)
    }

    /// Raw bits
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether a group is part of the set
    #[inline]
    pub const fn contains(self, group: DigitGroup) -> bool {
        self.0 & group.bit() != 0
    }

    /// Iterate the selected groups, upper first
    pub fn iter(self) -> impl Iterator<Item = DigitGroup> {
        DigitGroup::ALL.into_iter().filter(move |g| self.contains(*g))
    }
}

impl From<DigitGroup> for DigitGroups {
    fn from(group: DigitGroup) -> Self {
        Self(group.bit())
    }
}

impl BitOr for DigitGroups {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr for DigitGroup {
    type Output = DigitGroups;

    fn bitor(self, rhs: Self) -> DigitGroups {
        DigitGroups(self.bit() | rhs.bit())
    }
}

/// Set of digits as a one-hot byte (bit7 = digit 0 … bit0 = digit 7)
///
/// This is the layout of the digit-select byte, the decimal point mask
/// and the blink selection mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitMask(u8);

/// Decimal points use the digit mask layout
pub type DecimalPoints = DigitMask;

impl DigitMask {
    /// No digit
    pub const NONE: Self = Self(0x00);
    /// Every digit
    pub const ALL: Self = Self(0xFF);

    /// Wrap a raw mask
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Mask bit for a digit index
    ///
    /// Returns 0 for indexes past the last digit.
    #[inline]
    pub const fn bit(digit: usize) -> u8 {
        if digit < MAX_DIGITS {
            0x80 >> digit
        } else {
            0
        }
    }

    /// Mask selecting exactly one digit
    pub const fn single(digit: usize) -> Option<Self> {
        if digit < MAX_DIGITS {
            Some(Self(Self::bit(digit)))
        } else {
            None
        }
    }

    /// Mask selecting every digit of a group
    #[inline]
    pub const fn group(group: DigitGroup) -> Self {
        match group {
            DigitGroup::Upper => Self(0xF0),
            DigitGroup::Lower => Self(0x0F),
        }
    }

    /// Check whether a digit is selected
    #[inline]
    pub const fn contains(self, digit: usize) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Check whether no digit is selected
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Copy of this mask with one more digit selected
    #[inline]
    pub const fn with(self, digit: usize) -> Self {
        Self(self.0 | Self::bit(digit))
    }

    /// Iterate selected digit indexes in ascending order
    pub fn digits(self) -> impl Iterator<Item = usize> {
        (0..MAX_DIGITS).filter(move |d| self.contains(*d))
    }
}

impl From<u8> for DigitMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<DigitGroup> for DigitMask {
    fn from(group: DigitGroup) -> Self {
        Self::group(group)
    }
}

impl BitOr for DigitMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_bit_layout() {
        assert_eq!(DigitMask::bit(0), 0x80);
        assert_eq!(DigitMask::bit(3), 0x10);
        assert_eq!(DigitMask::bit(4), 0x08);
        assert_eq!(DigitMask::bit(7), 0x01);
        assert_eq!(DigitMask::bit(8), 0x00);
    }

    #[test]
    fn test_mask_digits() {
        let mask = DigitMask::from_bits(0x90);
        let mut digits = mask.digits();
        assert_eq!(digits.next(), Some(0));
        assert_eq!(digits.next(), Some(3));
        assert_eq!(digits.next(), None);

        assert!(DigitMask::single(8).is_none());
        assert_eq!(DigitMask::single(1).map(DigitMask::bits), Some(0x40));
    }

    #[test]
    fn test_group_masks() {
        assert_eq!(DigitMask::from(DigitGroup::Upper).bits(), 0xF0);
        assert_eq!(DigitMask::from(DigitGroup::Lower).bits(), 0x0F);
        assert_eq!(DigitGroup::Lower.first_digit(), 4);
        assert_eq!(DigitGroup::of_digit(3), Some(DigitGroup::Upper));
        assert_eq!(DigitGroup::of_digit(4), Some(DigitGroup::Lower));
        assert_eq!(DigitGroup::of_digit(8), None);
    }

    #[test]
    fn test_group_set() {
        let both = DigitGroup::Upper | DigitGroup::Lower;
        assert_eq!(both, DigitGroups::BOTH);
        assert!(both.contains(DigitGroup::Upper));
        assert!(both.contains(DigitGroup::Lower));

        // Reserved bits are dropped
        let lower = DigitGroups::from_bits(0xFE);
        assert_eq!(lower, DigitGroups::LOWER);
        assert_eq!(lower.iter().count(), 1);

        assert_eq!(DigitGroups::NONE.iter().count(), 0);
    }
}
