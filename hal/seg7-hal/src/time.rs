//! Monotonic time source
//!
//! Blink and scroll timing never read a global clock directly; the
//! display owns a `MonotonicClock` and samples it once per refresh.

/// Millisecond monotonic clock
///
/// Values must never decrease. The epoch is arbitrary (usually boot).
pub trait MonotonicClock {
    /// Milliseconds elapsed since the clock's epoch
    fn now_ms(&self) -> u64;
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
