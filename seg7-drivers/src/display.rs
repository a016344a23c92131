//! Seven-segment display driver
//!
//! `Seg7Display` owns the SPI bus, the chip-select pin and a clock, and
//! keeps all display state in memory. Nothing reaches the shield until
//! `refresh()` is called; call it often (every few milliseconds) so the
//! multiplexed digits stay lit and blink/scroll timing stays smooth.
//!
//! # Wire format
//!
//! One frame per digit: chip select low, two bytes `[select, segments]`,
//! chip select high. The shield latches on the rising edge.

use seg7_core::buffer::{cell_code, SPACE};
use seg7_core::config::{validate_chip_select, validate_digit_count, DEFAULT_DIGIT_COUNT};
use seg7_core::{
    BlinkController, DisplayBuffer, DisplayConfig, DisplayError, GlyphTable, ScrollController,
    ScrollDirection,
};
use seg7_hal::gpio::ChipSelect;
use seg7_hal::{MonotonicClock, OutputPin, SpiBus};
use seg7_protocol::{DecimalPoints, DigitGroup, DigitGroups, DigitMask, Packet};

/// Outcome of one refresh pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshReport {
    /// Frames the bus accepted
    pub sent: u8,
    /// Frames lost to bus errors
    pub dropped: u8,
}

impl RefreshReport {
    /// Total frames attempted
    pub fn frames(&self) -> u8 {
        self.sent + self.dropped
    }
}

/// Seven-segment display on an SPI shield
///
/// Generic over the bus, the chip-select pin and the clock so the same
/// driver runs on hardware and against mocks.
pub struct Seg7Display<B, CS, C> {
    bus: B,
    cs: CS,
    clock: C,
    /// Chip-select identifier accepted by `begin()`
    chip_select: Option<u8>,
    /// Glyph table; refresh is a no-op until one is set
    table: Option<GlyphTable>,
    digit_count: u8,
    buffer: DisplayBuffer,
    decimal_points: DecimalPoints,
    blink: BlinkController,
    scroll: [ScrollController; 2],
}

impl<B, CS, C> Seg7Display<B, CS, C>
where
    B: SpiBus,
    CS: OutputPin,
    C: MonotonicClock,
{
    /// Create a display that is not yet configured
    ///
    /// The chip-select line is released immediately.
    pub fn new(bus: B, mut cs: CS, clock: C) -> Self {
        cs.deselect();
        Self {
            bus,
            cs,
            clock,
            chip_select: None,
            table: None,
            digit_count: DEFAULT_DIGIT_COUNT,
            buffer: DisplayBuffer::new(),
            decimal_points: DecimalPoints::NONE,
            blink: BlinkController::new(),
            scroll: [ScrollController::new(), ScrollController::new()],
        }
    }

    /// Create and configure a display in one step
    pub fn from_config(
        bus: B,
        cs: CS,
        clock: C,
        config: &DisplayConfig,
    ) -> Result<Self, DisplayError> {
        config.validate()?;
        let mut display = Self::new(bus, cs, clock);
        display.begin(config.chip_select, config.glyphs.table())?;
        display.set_digit_count(config.digit_count)?;
        Ok(display)
    }

    /// Store the chip-select identifier and glyph table
    ///
    /// On error nothing changes and `refresh()` stays a no-op if no table
    /// was set before.
    pub fn begin(&mut self, chip_select: u8, table: GlyphTable) -> Result<(), DisplayError> {
        let chip_select = validate_chip_select(chip_select).inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected chip select {}", chip_select);
        })?;
        self.chip_select = Some(chip_select);
        self.table = Some(table);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Display ready: cs={}, glyphs {}..={}",
            chip_select,
            table.first(),
            table.last()
        );

        Ok(())
    }

    /// Like `begin()`, validating raw glyph table bytes first
    pub fn begin_with_bytes(
        &mut self,
        chip_select: u8,
        table: &'static [u8],
    ) -> Result<(), DisplayError> {
        let table = GlyphTable::from_bytes(table)?;
        self.begin(chip_select, table)
    }

    /// Swap the glyph table
    ///
    /// The display stays idle until `begin()` has also set a chip select.
    pub fn set_glyph_table(&mut self, table: GlyphTable) {
        self.table = Some(table);
    }

    /// Active glyph table
    pub fn glyph_table(&self) -> Option<GlyphTable> {
        self.table
    }

    /// Check if `begin()` succeeded
    pub fn is_ready(&self) -> bool {
        self.chip_select.is_some() && self.table.is_some()
    }

    /// Chip-select identifier, once configured
    pub fn chip_select(&self) -> Option<u8> {
        self.chip_select
    }

    /// Set how many digits are fitted (1..=8)
    pub fn set_digit_count(&mut self, count: u8) -> Result<(), DisplayError> {
        self.digit_count = validate_digit_count(count).inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected digit count {}", count);
        })?;
        Ok(())
    }

    /// Digits refreshed and writable
    pub fn digit_count(&self) -> u8 {
        self.digit_count
    }

    // === Text ===

    /// Write up to eight characters across both rows
    ///
    /// Short text is padded with spaces, long text truncated.
    pub fn write(&mut self, text: &str) {
        self.buffer.write_all(text);
    }

    /// Write up to four characters to one row
    pub fn write_group(&mut self, group: DigitGroup, text: &str) {
        self.buffer.write_group(group, text);
    }

    /// Write up to four characters to the upper row
    pub fn write_upper(&mut self, text: &str) {
        self.write_group(DigitGroup::Upper, text);
    }

    /// Write up to four characters to the lower row
    pub fn write_lower(&mut self, text: &str) {
        self.write_group(DigitGroup::Lower, text);
    }

    /// Set one digit and refresh right away
    ///
    /// `position` is 1-based and must not exceed `digit_count()`.
    pub fn write_digit(&mut self, position: u8, ch: char) -> Result<(), DisplayError> {
        if position == 0 || position > self.digit_count {
            return Err(DisplayError::OutOfRange);
        }
        let cell = self
            .buffer
            .get_mut(usize::from(position - 1))
            .ok_or(DisplayError::OutOfRange)?;
        *cell = cell_code(ch);
        self.refresh();
        Ok(())
    }

    /// Read one buffered character
    ///
    /// `index` is 0-based over all eight cells, regardless of the digit
    /// count.
    pub fn read_digit(&self, index: u8) -> Result<char, DisplayError> {
        self.buffer
            .get(usize::from(index))
            .map(char::from)
            .ok_or(DisplayError::OutOfRange)
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Buffered characters
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    // === Decimal points ===

    /// Light the decimal points selected by `points`
    pub fn set_decimal_points(&mut self, points: impl Into<DecimalPoints>) {
        self.decimal_points = points.into();
    }

    /// Decimal points currently lit
    pub fn decimal_points(&self) -> DecimalPoints {
        self.decimal_points
    }

    // === Blink ===

    /// Blink the digits selected by `digits`
    ///
    /// Selected digits go blank and show again on the first refresh once
    /// the clock has moved past this call.
    pub fn start_blink(&mut self, digits: impl Into<DigitMask>, on_ms: u32, off_ms: u32) {
        let digits = digits.into();
        let now = self.clock.now_ms();
        self.blink.enable(digits, on_ms, off_ms, now);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Blink {=u8:#x}: on {}ms off {}ms",
            digits.bits(),
            on_ms,
            off_ms
        );
    }

    /// Stop blinking on every digit
    pub fn stop_blink(&mut self) {
        self.blink.disable();
    }

    /// Digits currently blinking
    pub fn blinking(&self) -> DigitMask {
        self.blink.blinking_mask()
    }

    /// Blink controller state
    pub fn blink(&self) -> &BlinkController {
        &self.blink
    }

    // === Scroll ===

    /// Scroll `text` through one row
    ///
    /// The row is blanked and fills one character per `delay_ms`. A new
    /// scroll replaces any running one on the same row.
    pub fn start_scroll(
        &mut self,
        group: DigitGroup,
        text: &str,
        delay_ms: u32,
        direction: ScrollDirection,
    ) {
        let now = self.clock.now_ms();
        self.scroll[group.index()].start(
            self.buffer.group_mut(group),
            text,
            delay_ms,
            direction,
            now,
        );

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Scroll {} {}: {} chars every {}ms",
            group,
            direction,
            self.scroll[group.index()].text().len(),
            delay_ms
        );
    }

    /// Scroll the four characters the row currently shows
    pub fn scroll_current(&mut self, group: DigitGroup, delay_ms: u32, direction: ScrollDirection) {
        let now = self.clock.now_ms();
        self.scroll[group.index()].start_from_cells(
            self.buffer.group_mut(group),
            delay_ms,
            direction,
            now,
        );
    }

    /// Stop scrolling on the selected rows
    ///
    /// The rows keep whatever they showed last.
    pub fn stop_scroll(&mut self, groups: impl Into<DigitGroups>) {
        for group in groups.into().iter() {
            self.scroll[group.index()].stop();
        }
    }

    /// Check if a row is scrolling
    pub fn is_scrolling(&self, group: DigitGroup) -> bool {
        self.scroll[group.index()].is_active()
    }

    /// Scroll controller of one row
    pub fn scroll(&self, group: DigitGroup) -> &ScrollController {
        &self.scroll[group.index()]
    }

    // === Refresh ===

    /// Advance animations and send every fitted digit once
    ///
    /// Bus errors drop that digit's frame for this pass only.
    pub fn refresh(&mut self) -> RefreshReport {
        let mut report = RefreshReport::default();
        let (Some(_), Some(table)) = (self.chip_select, self.table) else {
            return report;
        };
        let now = self.clock.now_ms();

        for group in DigitGroup::ALL {
            self.scroll[group.index()].advance(self.buffer.group_mut(group), now);
        }

        for digit in 0..usize::from(self.digit_count) {
            let packet = if self.blink.advance(digit, now) {
                let ch = self.buffer.get(digit).unwrap_or(SPACE);
                Packet::with_decimal_point(digit, table.decode(ch), self.decimal_points)
            } else {
                Packet::blank(digit)
            };
            let Some(packet) = packet else {
                continue;
            };

            match self.transmit(packet) {
                Ok(()) => report.sent += 1,
                Err(_e) => {
                    report.dropped += 1;
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Digit {} frame dropped", digit);
                }
            }
        }

        report
    }

    /// Send one framed packet
    fn transmit(&mut self, packet: Packet) -> Result<(), B::Error> {
        let mut frame = packet.to_bytes();
        self.cs.select();
        let result = self.bus.transfer_in_place(&mut frame);
        self.cs.deselect();
        result
    }

    // === Resources ===

    /// Get a reference to the bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Get a reference to the chip-select pin
    pub fn cs(&self) -> &CS {
        &self.cs
    }

    /// Release the bus, pin and clock
    pub fn release(self) -> (B, CS, C) {
        (self.bus, self.cs, self.clock)
    }
}
