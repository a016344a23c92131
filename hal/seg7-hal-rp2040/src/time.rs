//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use seg7_hal::MonotonicClock;

/// Clock reading `embassy_time::Instant` (time since boot)
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
