//! Refresh task
//!
//! Owns the display and multiplexes it: one refresh pass per tick, with
//! queued commands applied in between.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::SPI0;
use embassy_time::{Duration, Ticker};
use seg7_drivers::Seg7Display;
use seg7_hal_rp2040::{EmbassyClock, RpOutput, RpSpi};

use crate::channels::DISPLAY_COMMANDS;
use crate::config::REFRESH_INTERVAL_MS;

/// Display as wired on the board
pub type Display = Seg7Display<RpSpi<'static, SPI0>, RpOutput<'static>, EmbassyClock>;

/// Refresh task - drives the display and applies queued commands
#[embassy_executor::task]
pub async fn refresh_task(mut display: Display) {
    info!("Refresh task started ({}ms interval)", REFRESH_INTERVAL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_INTERVAL_MS));

    loop {
        match select(ticker.next(), DISPLAY_COMMANDS.receive()).await {
            Either::First(()) => {
                let report = display.refresh();
                if report.dropped > 0 {
                    warn!("Refresh dropped {} of {} frames", report.dropped, report.frames());
                }
            }
            Either::Second(command) => {
                debug!("Display command: {}", command);
                command.apply(&mut display);
            }
        }
    }
}
