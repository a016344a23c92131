//! SPI bus abstractions
//!
//! Provides the bus trait the refresh engine transmits through, and the
//! configuration a chip-specific HAL needs to set the bus up.

/// SPI bus master
///
/// Transfers are blocking and short (two bytes per digit). Chip select is
/// not part of the bus; the caller frames each transfer itself.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Transfer data in place (simultaneous write/read)
    ///
    /// Writes `data` out while replacing it with the bytes clocked in.
    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        (**self).transfer_in_place(data)
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode (polarity and phase)
    pub mode: Mode,
    /// Bit order within each byte
    pub bit_order: BitOrder,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl SpiConfig {
    /// Bus settings for the 2×4 digit shift-register shield
    ///
    /// Mode 0, least significant bit first, 1 MHz.
    pub const fn seg7() -> Self {
        Self {
            frequency: 1_000_000,
            mode: Mode::Mode0,
            bit_order: BitOrder::LsbFirst,
        }
    }
}

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

impl BitOrder {
    /// Convert a byte so an MSB-first shifter emits it in this order
    ///
    /// Hardware that only shifts MSB first can still talk LSB first by
    /// reversing each byte before it is loaded.
    #[inline]
    pub const fn apply(self, byte: u8) -> u8 {
        match self {
            BitOrder::MsbFirst => byte,
            BitOrder::LsbFirst => byte.reverse_bits(),
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Swaps the two bytes of each frame, counting transfers
    struct SwapBus {
        transfers: u8,
    }

    impl SpiBus for SwapBus {
        type Error = ();

        fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), ()> {
            data.reverse();
            self.transfers += 1;
            Ok(())
        }
    }

    fn send<B: SpiBus>(mut bus: B, frame: &mut [u8]) -> Result<(), B::Error> {
        bus.transfer_in_place(frame)
    }

    #[test]
    fn test_bus_needs_only_transfer_in_place() {
        let mut bus = SwapBus { transfers: 0 };
        let mut frame = [0x80, 0xFC];
        send(&mut bus, &mut frame).unwrap();
        assert_eq!(frame, [0xFC, 0x80]);
        assert_eq!(bus.transfers, 1);
    }

    #[test]
    fn test_lsb_first_reverses_bytes() {
        assert_eq!(BitOrder::LsbFirst.apply(0x80), 0x01);
        assert_eq!(BitOrder::LsbFirst.apply(0xFC), 0x3F);
        assert_eq!(BitOrder::MsbFirst.apply(0xFC), 0xFC);
    }

    #[test]
    fn test_seg7_config() {
        let config = SpiConfig::seg7();
        assert_eq!(config.mode, Mode::Mode0);
        assert_eq!(config.bit_order, BitOrder::LsbFirst);

        let (polarity, phase) = config.mode.into();
        assert_eq!(polarity, Polarity::IdleLow);
        assert_eq!(phase, Phase::CaptureOnFirstTransition);
    }
}
