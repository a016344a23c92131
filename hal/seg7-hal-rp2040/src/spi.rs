//! Blocking SPI master
//!
//! The RP2040 SPI block only shifts MSB first, so LSB-first buses are
//! emulated by reversing each byte on the way out and on the way in.

use embassy_rp::spi::{self, Blocking, Instance, Spi};
use seg7_hal::spi::{Phase, Polarity};
use seg7_hal::{BitOrder, SpiBus, SpiConfig};

/// SPI transfer error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError {
    /// The peripheral reported a failed transfer
    Transfer,
}

impl From<spi::Error> for SpiError {
    fn from(_: spi::Error) -> Self {
        SpiError::Transfer
    }
}

/// Build the embassy-rp bus configuration for `config`
///
/// Bit order is not part of it; `RpSpi` handles that in software.
pub fn rp_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase) = config.mode.into();
    let mut c = spi::Config::default();
    c.frequency = config.frequency;
    c.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    c.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    c
}

/// Blocking SPI bus on one of the RP2040 SPI blocks
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    bit_order: BitOrder,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    /// Wrap a bus created with `rp_config(config)`
    pub fn new(spi: Spi<'d, T, Blocking>, config: &SpiConfig) -> Self {
        Self {
            spi,
            bit_order: config.bit_order,
        }
    }

    /// Release the wrapped bus
    pub fn into_inner(self) -> Spi<'d, T, Blocking> {
        self.spi
    }
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = SpiError;

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), SpiError> {
        let order = self.bit_order;
        data.iter_mut().for_each(|b| *b = order.apply(*b));
        self.spi.blocking_transfer_in_place(data)?;
        data.iter_mut().for_each(|b| *b = order.apply(*b));
        Ok(())
    }
}
