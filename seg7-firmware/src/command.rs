//! Display commands sent between tasks

use seg7_core::ScrollDirection;
use seg7_drivers::Seg7Display;
use seg7_hal_rp2040::{MonotonicClock, OutputPin, SpiBus};
use seg7_protocol::{DecimalPoints, DigitGroup, DigitGroups, DigitMask};

/// One change to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    /// Write both rows
    Write(&'static str),
    /// Write one row
    WriteGroup(DigitGroup, &'static str),
    /// Scroll text through one row
    Scroll {
        group: DigitGroup,
        text: &'static str,
        delay_ms: u32,
        direction: ScrollDirection,
    },
    /// Stop scrolling on the given rows
    StopScroll(DigitGroups),
    /// Blink the selected digits
    Blink {
        digits: DigitMask,
        on_ms: u32,
        off_ms: u32,
    },
    /// Stop blinking on every digit
    StopBlink,
    /// Light the selected decimal points
    DecimalPoints(DecimalPoints),
}

impl DisplayCommand {
    /// Apply the command to `display`
    pub fn apply<B, CS, C>(self, display: &mut Seg7Display<B, CS, C>)
    where
        B: SpiBus,
        CS: OutputPin,
        C: MonotonicClock,
    {
        match self {
            DisplayCommand::Write(text) => display.write(text),
            DisplayCommand::WriteGroup(group, text) => display.write_group(group, text),
            DisplayCommand::Scroll {
                group,
                text,
                delay_ms,
                direction,
            } => display.start_scroll(group, text, delay_ms, direction),
            DisplayCommand::StopScroll(groups) => display.stop_scroll(groups),
            DisplayCommand::Blink {
                digits,
                on_ms,
                off_ms,
            } => display.start_blink(digits, on_ms, off_ms),
            DisplayCommand::StopBlink => display.stop_blink(),
            DisplayCommand::DecimalPoints(points) => display.set_decimal_points(points),
        }
    }
}
