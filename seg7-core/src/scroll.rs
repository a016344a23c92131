//! Horizontal text scrolling for one row
//!
//! A row scrolls by shifting its four cells one place per interval and
//! feeding the next character of the source text into the free end. The
//! text wraps around, so scrolling runs until stopped.

use heapless::Vec;

use seg7_protocol::GROUP_LEN;

use crate::buffer::{cell_code, SPACE};

/// Longest source text kept for scrolling; longer text is cut
pub const MAX_SCROLL_LEN: usize = 64;

// A whole row always fits in the scroll text
const _: () = assert!(GROUP_LEN <= MAX_SCROLL_LEN);

/// Scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Text enters on the right and moves left
    Left,
    /// Text enters on the left and moves right, read backwards
    Right,
}

/// Scroll state for one row
#[derive(Debug, Clone)]
pub struct ScrollController {
    /// Text fed into the row
    text: Vec<u8, MAX_SCROLL_LEN>,
    /// Interval between shifts (ms); 0 = not scrolling
    delay_ms: u32,
    /// Time of the last shift (or of the start)
    last_advance_ms: u64,
    /// Scroll direction
    direction: ScrollDirection,
    /// Index of the next character to feed in
    marker: usize,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollController {
    /// Create an idle scroller
    pub const fn new() -> Self {
        Self {
            text: Vec::new(),
            delay_ms: 0,
            last_advance_ms: 0,
            direction: ScrollDirection::Left,
            marker: 0,
        }
    }

    /// Start scrolling `text` through `cells`
    ///
    /// The row is blanked first. Text past `MAX_SCROLL_LEN` characters is
    /// dropped. Empty text or a zero delay leaves the scroller idle on a
    /// blank row.
    pub fn start(
        &mut self,
        cells: &mut [u8; GROUP_LEN],
        text: &str,
        delay_ms: u32,
        direction: ScrollDirection,
        now_ms: u64,
    ) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.push(cell_code(ch)).is_err() {
                break;
            }
        }
        self.begin(cells, delay_ms, direction, now_ms);
    }

    /// Start scrolling the row's current contents
    pub fn start_from_cells(
        &mut self,
        cells: &mut [u8; GROUP_LEN],
        delay_ms: u32,
        direction: ScrollDirection,
        now_ms: u64,
    ) {
        self.text.clear();
        for &cell in cells.iter() {
            if self.text.push(cell).is_err() {
                break;
            }
        }
        self.begin(cells, delay_ms, direction, now_ms);
    }

    fn begin(
        &mut self,
        cells: &mut [u8; GROUP_LEN],
        delay_ms: u32,
        direction: ScrollDirection,
        now_ms: u64,
    ) {
        *cells = [SPACE; GROUP_LEN];
        self.direction = direction;
        self.last_advance_ms = now_ms;
        self.marker = match direction {
            ScrollDirection::Left => 0,
            ScrollDirection::Right => self.text.len().saturating_sub(1),
        };
        self.delay_ms = if self.text.is_empty() { 0 } else { delay_ms };
    }

    /// Stop scrolling; the row keeps its last contents
    pub fn stop(&mut self) {
        self.delay_ms = 0;
    }

    /// Check if the row is scrolling
    #[inline]
    pub fn is_active(&self) -> bool {
        self.delay_ms != 0
    }

    /// Interval between shifts (ms); 0 when idle
    #[inline]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Scroll direction
    #[inline]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Index of the next character to feed in
    #[inline]
    pub fn marker(&self) -> usize {
        self.marker
    }

    /// Source text
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Shift `cells` once if a full interval has passed
    ///
    /// Returns true if the row changed. Missed intervals are not caught
    /// up: a late call still shifts only one place.
    pub fn advance(&mut self, cells: &mut [u8; GROUP_LEN], now_ms: u64) -> bool {
        if !self.is_active() {
            return false;
        }
        if now_ms.saturating_sub(self.last_advance_ms) < u64::from(self.delay_ms) {
            return false;
        }
        let Some(&next) = self.text.get(self.marker) else {
            // Text and marker are always set together
            self.stop();
            return false;
        };

        let len = self.text.len();
        match self.direction {
            ScrollDirection::Left => {
                cells.rotate_left(1);
                cells[GROUP_LEN - 1] = next;
                self.marker = (self.marker + 1) % len;
            }
            ScrollDirection::Right => {
                cells.rotate_right(1);
                cells[0] = next;
                self.marker = if self.marker == 0 { len - 1 } else { self.marker - 1 };
            }
        }
        self.last_advance_ms = now_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let mut scroll = ScrollController::new();
        let mut cells = *b"ABCD";
        assert!(!scroll.is_active());
        assert!(!scroll.advance(&mut cells, 10_000));
        assert_eq!(&cells, b"ABCD");
    }

    #[test]
    fn test_start_blanks_row() {
        let mut scroll = ScrollController::new();
        let mut cells = *b"Octo";
        scroll.start(&mut cells, "ABCD", 100, ScrollDirection::Left, 0);
        assert_eq!(&cells, b"    ");
        assert!(scroll.is_active());
        assert_eq!(scroll.marker(), 0);
        assert_eq!(scroll.text(), b"ABCD");
    }

    #[test]
    fn test_left_scroll_sequence() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        scroll.start(&mut cells, "ABCD", 100, ScrollDirection::Left, 0);

        // Not yet
        assert!(!scroll.advance(&mut cells, 99));
        assert_eq!(&cells, b"    ");

        assert!(scroll.advance(&mut cells, 100));
        assert_eq!(&cells, b"   A");
        assert_eq!(scroll.marker(), 1);

        assert!(scroll.advance(&mut cells, 200));
        assert!(scroll.advance(&mut cells, 300));
        assert!(scroll.advance(&mut cells, 400));
        assert_eq!(&cells, b"ABCD");
        assert_eq!(scroll.marker(), 0);

        // Wraps around
        assert!(scroll.advance(&mut cells, 500));
        assert_eq!(&cells, b"BCDA");
    }

    #[test]
    fn test_right_scroll_sequence() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        scroll.start(&mut cells, "Hello ", 300, ScrollDirection::Right, 0);
        assert_eq!(scroll.marker(), 5);

        assert!(scroll.advance(&mut cells, 300));
        assert_eq!(&cells, b"    ");
        assert_eq!(scroll.marker(), 4);

        assert!(scroll.advance(&mut cells, 600));
        assert_eq!(&cells, b"o   ");

        for t in 1..=4 {
            scroll.advance(&mut cells, 600 + t * 300);
        }
        assert_eq!(&cells, b"Hell");
        assert_eq!(scroll.marker(), 5);
    }

    #[test]
    fn test_no_catch_up() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        scroll.start(&mut cells, "ABCD", 100, ScrollDirection::Left, 0);

        assert!(scroll.advance(&mut cells, 1_000));
        assert_eq!(&cells, b"   A");

        // Interval restarts from the late shift
        assert!(!scroll.advance(&mut cells, 1_099));
        assert!(scroll.advance(&mut cells, 1_100));
        assert_eq!(&cells, b"  AB");
    }

    #[test]
    fn test_stop_freezes_row() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        scroll.start(&mut cells, "ABCD", 100, ScrollDirection::Left, 0);
        scroll.advance(&mut cells, 100);
        scroll.advance(&mut cells, 200);

        scroll.stop();
        assert!(!scroll.is_active());
        assert!(!scroll.advance(&mut cells, 10_000));
        assert_eq!(&cells, b"  AB");
    }

    #[test]
    fn test_restart_supersedes() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        scroll.start(&mut cells, "ABCD", 100, ScrollDirection::Left, 0);
        scroll.advance(&mut cells, 100);

        scroll.start(&mut cells, "xy", 50, ScrollDirection::Right, 150);
        assert_eq!(&cells, b"    ");
        assert_eq!(scroll.marker(), 1);
        assert!(!scroll.advance(&mut cells, 199));
        assert!(scroll.advance(&mut cells, 200));
        assert_eq!(&cells, b"y   ");
    }

    #[test]
    fn test_empty_text_stays_idle() {
        let mut scroll = ScrollController::new();
        let mut cells = *b"ABCD";
        scroll.start(&mut cells, "", 100, ScrollDirection::Right, 0);
        assert_eq!(&cells, b"    ");
        assert!(!scroll.is_active());
        assert_eq!(scroll.marker(), 0);
    }

    #[test]
    fn test_zero_delay_stays_idle() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        scroll.start(&mut cells, "ABCD", 0, ScrollDirection::Left, 0);
        assert!(!scroll.is_active());
        assert!(!scroll.advance(&mut cells, 1_000));
    }

    #[test]
    fn test_long_text_is_cut() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        let long = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdefXYZ";
        scroll.start(&mut cells, long, 10, ScrollDirection::Left, 0);
        assert_eq!(scroll.text().len(), MAX_SCROLL_LEN);
    }

    #[test]
    fn test_start_from_cells() {
        let mut scroll = ScrollController::new();
        let mut cells = *b"1234";
        scroll.start_from_cells(&mut cells, 100, ScrollDirection::Left, 0);
        assert_eq!(&cells, b"    ");
        assert_eq!(scroll.text(), b"1234");

        scroll.advance(&mut cells, 100);
        assert_eq!(&cells, b"   1");
    }

    #[test]
    fn test_start_from_cells_replaces_full_text() {
        let mut scroll = ScrollController::new();
        let mut cells = [SPACE; GROUP_LEN];
        let long = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
        scroll.start(&mut cells, long, 10, ScrollDirection::Left, 0);
        assert_eq!(scroll.text().len(), MAX_SCROLL_LEN);

        let mut row = *b"ABCD";
        scroll.start_from_cells(&mut row, 10, ScrollDirection::Right, 0);
        assert_eq!(scroll.text(), b"ABCD");
        assert_eq!(&row, b"    ");
    }
}
