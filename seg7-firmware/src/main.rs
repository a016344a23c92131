//! Seg7 - Seven-Segment Display Demo Firmware
//!
//! Drives a 2x4 seven-segment display shield from an RP2040 over SPI0
//! and cycles through a showcase of text, scrolling, blinking and
//! decimal points. Wiring and digit count come from display.toml.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::spi::Spi;
use seg7_core::DisplayConfig;
use seg7_drivers::Seg7Display;
use seg7_hal_rp2040::spi::rp_config;
use seg7_hal_rp2040::{ChipSelectPins, EmbassyClock, PinBank, RpOutput, RpSpi, SpiConfig};
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod command;
mod tasks;

/// Values from display.toml, validated by build.rs
mod config {
    include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Seg7 firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (cs_pins, spi_pins) = ChipSelectPins::from_peripherals(p);
    let mut pins = PinBank::new(cs_pins);
    info!("Peripherals initialized");

    // SPI0: SCK GPIO18, MOSI GPIO19, MISO GPIO16
    let spi_config = SpiConfig::seg7();
    let spi = Spi::new_blocking(
        spi_pins.spi,
        spi_pins.clk,
        spi_pins.mosi,
        spi_pins.miso,
        rp_config(&spi_config),
    );
    let bus = RpSpi::new(spi, &spi_config);

    let cs = match pins.take(config::CHIP_SELECT) {
        Ok(pin) => RpOutput::chip_select(pin),
        Err(e) => {
            error!("Chip select GPIO{} unavailable: {}", config::CHIP_SELECT, e);
            return;
        }
    };

    let display_config = DisplayConfig {
        chip_select: config::CHIP_SELECT,
        digit_count: config::DIGIT_COUNT,
        glyphs: config::GLYPHS,
    };
    let display = match Seg7Display::from_config(bus, cs, EmbassyClock, &display_config) {
        Ok(display) => display,
        Err(e) => {
            error!("Display configuration rejected: {}", e);
            return;
        }
    };
    info!(
        "Display ready: cs=GPIO{}, {} digits, {} glyphs",
        config::CHIP_SELECT,
        config::DIGIT_COUNT,
        config::GLYPHS
    );

    unwrap!(spawner.spawn(tasks::refresh_task(display)));
    unwrap!(spawner.spawn(tasks::showcase_task()));
}
