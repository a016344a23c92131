//! Display configuration
//!
//! Board-level settings chosen once at startup: which chip-select line
//! the shield latches on, how many digits are fitted and which glyph
//! table to decode with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use seg7_protocol::MAX_DIGITS;

use crate::error::ConfigError;
use crate::glyph::GlyphTable;

/// Highest accepted chip-select identifier
pub const MAX_CHIP_SELECT: u8 = 10;

/// Chip select used when none is configured
pub const DEFAULT_CHIP_SELECT: u8 = 10;

/// Digits driven when none is configured
pub const DEFAULT_DIGIT_COUNT: u8 = 1;

/// Built-in glyph table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GlyphSet {
    /// '0'..='9'
    Numeric,
    /// '0'..='F'
    Hex,
    /// ' '..='z'
    #[default]
    Full,
}

impl GlyphSet {
    /// Table for this selection
    pub const fn table(self) -> GlyphTable {
        match self {
            GlyphSet::Numeric => GlyphTable::NUMERIC,
            GlyphSet::Hex => GlyphTable::HEX,
            GlyphSet::Full => GlyphTable::FULL,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Chip-select identifier (0..=10)
    pub chip_select: u8,
    /// Digits fitted (1..=8)
    pub digit_count: u8,
    /// Glyph table to decode with
    pub glyphs: GlyphSet,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chip_select: DEFAULT_CHIP_SELECT,
            digit_count: DEFAULT_DIGIT_COUNT,
            glyphs: GlyphSet::Full,
        }
    }
}

impl DisplayConfig {
    /// Check every field
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_chip_select(self.chip_select)?;
        validate_digit_count(self.digit_count)?;
        Ok(())
    }
}

/// Check a chip-select identifier
pub fn validate_chip_select(chip_select: u8) -> Result<u8, ConfigError> {
    if chip_select > MAX_CHIP_SELECT {
        return Err(ConfigError::InvalidChipSelect);
    }
    Ok(chip_select)
}

/// Check a digit count
pub fn validate_digit_count(count: u8) -> Result<u8, ConfigError> {
    match count as usize {
        0 => Err(ConfigError::TooFewDigits),
        n if n > MAX_DIGITS => Err(ConfigError::TooManyDigits),
        _ => Ok(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DisplayConfig::default();
        assert_eq!(config.digit_count, 1);
        assert_eq!(config.chip_select, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chip_select_range() {
        assert_eq!(validate_chip_select(0), Ok(0));
        assert_eq!(validate_chip_select(10), Ok(10));
        assert_eq!(
            validate_chip_select(11),
            Err(ConfigError::InvalidChipSelect)
        );
    }

    #[test]
    fn test_digit_count_range() {
        assert_eq!(validate_digit_count(0), Err(ConfigError::TooFewDigits));
        assert_eq!(validate_digit_count(1), Ok(1));
        assert_eq!(validate_digit_count(8), Ok(8));
        assert_eq!(validate_digit_count(9), Err(ConfigError::TooManyDigits));
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let config = DisplayConfig {
            chip_select: 42,
            digit_count: 0,
            glyphs: GlyphSet::Hex,
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidChipSelect));
    }

    #[test]
    fn test_glyph_set_tables() {
        assert_eq!(GlyphSet::Numeric.table(), GlyphTable::NUMERIC);
        assert_eq!(GlyphSet::Hex.table(), GlyphTable::HEX);
        assert_eq!(GlyphSet::default().table(), GlyphTable::FULL);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_toml() {
        let config: DisplayConfig = toml::from_str(
            r#"
            chip_select = 5
            digit_count = 8
            glyphs = "hex"
            "#,
        )
        .unwrap();
        assert_eq!(config.chip_select, 5);
        assert_eq!(config.digit_count, 8);
        assert_eq!(config.glyphs, GlyphSet::Hex);

        // Missing keys fall back to defaults
        let partial: DisplayConfig = toml::from_str("digit_count = 4").unwrap();
        assert_eq!(partial.chip_select, DEFAULT_CHIP_SELECT);
        assert_eq!(partial.glyphs, GlyphSet::Full);
    }
}
