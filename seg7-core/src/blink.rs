//! Per-digit blink timing
//!
//! Each digit either shows its content steadily or alternates between a
//! visible phase (`on_ms`) and a blank phase (`off_ms`). The refresh
//! engine advances one digit at a time with the current clock reading.

use seg7_protocol::{DigitMask, MAX_DIGITS};

/// Blink timing for one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkState {
    /// Visible phase length (ms)
    on_ms: u32,
    /// Blank phase length (ms)
    off_ms: u32,
    /// Time of the next toggle; `None` when not blinking
    next_toggle_ms: Option<u64>,
    /// Digit is currently shown
    visible: bool,
}

impl Default for BlinkState {
    fn default() -> Self {
        Self::STEADY
    }
}

impl BlinkState {
    /// Not blinking, always visible
    pub const STEADY: Self = Self {
        on_ms: 0,
        off_ms: 0,
        next_toggle_ms: None,
        visible: true,
    };

    /// Start blinking, blank first
    ///
    /// The deadline is `now_ms`, so the first refresh after `now_ms`
    /// makes the digit visible.
    pub const fn started(on_ms: u32, off_ms: u32, now_ms: u64) -> Self {
        Self {
            on_ms,
            off_ms,
            next_toggle_ms: Some(now_ms),
            visible: false,
        }
    }

    /// Check if the digit is blinking
    #[inline]
    pub const fn is_blinking(&self) -> bool {
        self.next_toggle_ms.is_some()
    }

    /// Check if the digit is currently shown
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Time of the next toggle, if blinking
    #[inline]
    pub const fn next_toggle_ms(&self) -> Option<u64> {
        self.next_toggle_ms
    }

    /// Visible and blank phase lengths (ms)
    #[inline]
    pub const fn durations(&self) -> (u32, u32) {
        (self.on_ms, self.off_ms)
    }

    /// Advance to `now_ms` and report visibility
    ///
    /// A deadline counts as passed once the clock is strictly beyond it,
    /// unlike scrolling, which shifts as soon as the full delay has
    /// elapsed. The strict boundary is intentional: a refresh in the
    /// same millisecond as `enable` keeps the digit blank, and each phase
    /// lasts one millisecond longer than its nominal length. At most one
    /// toggle happens per call.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if let Some(deadline) = self.next_toggle_ms {
            if now_ms > deadline {
                self.visible = !self.visible;
                let phase = if self.visible { self.on_ms } else { self.off_ms };
                self.next_toggle_ms = Some(now_ms.saturating_add(u64::from(phase)));
            }
        }
        self.visible
    }
}

/// Blink state for all eight digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkController {
    digits: [BlinkState; MAX_DIGITS],
}

impl Default for BlinkController {
    fn default() -> Self {
        Self::new()
    }
}

impl BlinkController {
    /// Create a controller with no digit blinking
    pub const fn new() -> Self {
        Self {
            digits: [BlinkState::STEADY; MAX_DIGITS],
        }
    }

    /// Start blinking every digit selected by `mask`
    ///
    /// Selected digits go blank immediately; unselected digits keep their
    /// current state.
    pub fn enable(&mut self, mask: DigitMask, on_ms: u32, off_ms: u32, now_ms: u64) {
        for digit in mask.digits() {
            self.digits[digit] = BlinkState::started(on_ms, off_ms, now_ms);
        }
    }

    /// Stop blinking on all eight digits
    pub fn disable(&mut self) {
        self.digits = [BlinkState::STEADY; MAX_DIGITS];
    }

    /// Advance one digit and report its visibility
    ///
    /// Digits past the last position are reported visible.
    pub fn advance(&mut self, digit: usize, now_ms: u64) -> bool {
        match self.digits.get_mut(digit) {
            Some(state) => state.advance(now_ms),
            None => true,
        }
    }

    /// Blink state of one digit
    pub fn state(&self, digit: usize) -> Option<&BlinkState> {
        self.digits.get(digit)
    }

    /// Check if any digit is blinking
    pub fn any_blinking(&self) -> bool {
        self.digits.iter().any(BlinkState::is_blinking)
    }

    /// Digits currently blinking
    pub fn blinking_mask(&self) -> DigitMask {
        self.digits
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_blinking())
            .fold(DigitMask::NONE, |mask, (digit, _)| mask.with(digit))
    }
}
