//! `embedded-hal` 1.0 adapters
//!
//! Lets the display run on any chip with an `embedded-hal` SPI bus and
//! output pin. Bit order is handled here for buses that only shift
//! MSB first.

use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal::spi::SpiBus as EhSpiBus;
use seg7_hal::{BitOrder, OutputPin, SpiBus};

/// SPI bus adapter
pub struct EmbeddedSpi<SPI> {
    spi: SPI,
    bit_order: BitOrder,
}

impl<SPI> EmbeddedSpi<SPI> {
    /// Wrap a bus that already shifts in the order the shield expects
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            bit_order: BitOrder::MsbFirst,
        }
    }

    /// Wrap an MSB-first bus, reversing bytes to send them `bit_order`
    pub fn with_bit_order(spi: SPI, bit_order: BitOrder) -> Self {
        Self { spi, bit_order }
    }

    /// Release the wrapped bus
    pub fn into_inner(self) -> SPI {
        self.spi
    }
}

impl<SPI: EhSpiBus> SpiBus for EmbeddedSpi<SPI> {
    type Error = SPI::Error;

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        let order = self.bit_order;
        data.iter_mut().for_each(|b| *b = order.apply(*b));
        self.spi.transfer_in_place(data)?;
        self.spi.flush()?;
        data.iter_mut().for_each(|b| *b = order.apply(*b));
        Ok(())
    }
}

/// Output pin adapter
///
/// Pin errors are swallowed; the tracked level only changes when the
/// write succeeded.
pub struct EmbeddedPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin> EmbeddedPin<P> {
    /// Wrap a pin, driving it high (chip select released)
    pub fn new(mut pin: P) -> Self {
        let high = pin.set_high().is_ok();
        Self { pin, high }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin> OutputPin for EmbeddedPin<P> {
    fn set_high(&mut self) {
        if self.pin.set_high().is_ok() {
            self.high = true;
        }
    }

    fn set_low(&mut self) {
        if self.pin.set_low().is_ok() {
            self.high = false;
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
