//! Chip-select pin allocation
//!
//! The display is configured with a chip-select identifier (0..=10) that
//! names the GPIO driving the shield's latch. The pin bank holds those
//! GPIOs and hands one out by number at runtime, so the choice can come
//! from `display.toml` instead of being hardcoded.
//!
//! SPI0 uses GPIO16 (MISO), GPIO18 (SCK) and GPIO19 (MOSI), all outside
//! the chip-select range.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{
    PIN_0, PIN_1, PIN_10, PIN_16, PIN_18, PIN_19, PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8,
    PIN_9, SPI0,
};
use embassy_rp::{Peri, Peripherals};

/// Number of GPIOs usable as chip select
pub const CHIP_SELECT_PINS: usize = 11;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-10 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
}

/// Pin bank holding the chip-select capable GPIOs
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; CHIP_SELECT_PINS],
}

impl PinBank {
    /// Create a pin bank owning GPIO0..=GPIO10
    pub fn new(p: ChipSelectPins) -> Self {
        Self {
            pins: [
                Some(p.pin0.into()),
                Some(p.pin1.into()),
                Some(p.pin2.into()),
                Some(p.pin3.into()),
                Some(p.pin4.into()),
                Some(p.pin5.into()),
                Some(p.pin6.into()),
                Some(p.pin7.into()),
                Some(p.pin8.into()),
                Some(p.pin9.into()),
                Some(p.pin10.into()),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(usize::from(pin_num))
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}

/// GPIOs that can serve as chip select
pub struct ChipSelectPins {
    pub pin0: Peri<'static, PIN_0>,
    pub pin1: Peri<'static, PIN_1>,
    pub pin2: Peri<'static, PIN_2>,
    pub pin3: Peri<'static, PIN_3>,
    pub pin4: Peri<'static, PIN_4>,
    pub pin5: Peri<'static, PIN_5>,
    pub pin6: Peri<'static, PIN_6>,
    pub pin7: Peri<'static, PIN_7>,
    pub pin8: Peri<'static, PIN_8>,
    pub pin9: Peri<'static, PIN_9>,
    pub pin10: Peri<'static, PIN_10>,
}

/// SPI0 block and its pins
pub struct SpiPins {
    pub spi: Peri<'static, SPI0>,
    pub clk: Peri<'static, PIN_18>,
    pub mosi: Peri<'static, PIN_19>,
    pub miso: Peri<'static, PIN_16>,
}

impl ChipSelectPins {
    /// Split the peripherals the display needs out of `p`
    pub fn from_peripherals(p: Peripherals) -> (Self, SpiPins) {
        let pins = Self {
            pin0: p.PIN_0,
            pin1: p.PIN_1,
            pin2: p.PIN_2,
            pin3: p.PIN_3,
            pin4: p.PIN_4,
            pin5: p.PIN_5,
            pin6: p.PIN_6,
            pin7: p.PIN_7,
            pin8: p.PIN_8,
            pin9: p.PIN_9,
            pin10: p.PIN_10,
        };
        let spi = SpiPins {
            spi: p.SPI0,
            clk: p.PIN_18,
            mosi: p.PIN_19,
            miso: p.PIN_16,
        };
        (pins, spi)
    }
}
