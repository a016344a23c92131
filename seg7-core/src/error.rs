//! Error types
//!
//! Every failure is reported per call and leaves the display state as it
//! was before the call.

use crate::glyph::GlyphTableError;

/// Configuration rejected during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Chip-select identifier outside the supported range
    InvalidChipSelect,
    /// Digit count of zero
    TooFewDigits,
    /// Digit count larger than the shield
    TooManyDigits,
    /// Glyph table bytes are malformed
    InvalidGlyphTable(GlyphTableError),
}

impl From<GlyphTableError> for ConfigError {
    fn from(e: GlyphTableError) -> Self {
        ConfigError::InvalidGlyphTable(e)
    }
}

/// Errors returned by display operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Invalid configuration
    Config(ConfigError),
    /// Digit index outside the valid range for the operation
    OutOfRange,
}

impl From<ConfigError> for DisplayError {
    fn from(e: ConfigError) -> Self {
        DisplayError::Config(e)
    }
}

impl From<GlyphTableError> for DisplayError {
    fn from(e: GlyphTableError) -> Self {
        DisplayError::Config(e.into())
    }
}
