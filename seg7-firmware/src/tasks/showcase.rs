//! Showcase task
//!
//! Cycles through static text, row scrolling, blinking and decimal
//! points, holding each scene for a while.

use defmt::*;
use embassy_time::Timer;
use seg7_core::ScrollDirection;
use seg7_protocol::{DigitGroup, DigitGroups, DigitMask};

use crate::channels::DISPLAY_COMMANDS;
use crate::command::DisplayCommand;

/// Box outline drawn with special symbols
const FRAME: &str = "\u{c}\u{1}\u{1}\u{b}\u{e}\u{4}\u{4}\u{d}";

/// Alternating left/right bars
const SIGNS: &str = "\u{b}\u{c}\u{b}\u{c}";

/// How long the opening frame stays up (ms)
const FRAME_HOLD_MS: u64 = 1000;

/// A set of commands and how long to show the result
struct Scene {
    commands: &'static [DisplayCommand],
    hold_ms: u64,
}

const SCENES: &[Scene] = &[
    Scene {
        commands: &[DisplayCommand::Write("Octopart")],
        hold_ms: 1000,
    },
    Scene {
        commands: &[
            DisplayCommand::StopBlink,
            DisplayCommand::Scroll {
                group: DigitGroup::Upper,
                text: "Hello ",
                delay_ms: 300,
                direction: ScrollDirection::Left,
            },
            DisplayCommand::WriteGroup(DigitGroup::Lower, " Crn"),
        ],
        hold_ms: 5000,
    },
    Scene {
        commands: &[
            DisplayCommand::StopScroll(DigitGroups::UPPER),
            DisplayCommand::WriteGroup(DigitGroup::Upper, "____"),
            DisplayCommand::Scroll {
                group: DigitGroup::Lower,
                text: "WUorld ",
                delay_ms: 200,
                direction: ScrollDirection::Right,
            },
        ],
        hold_ms: 5000,
    },
    Scene {
        commands: &[
            DisplayCommand::StopScroll(DigitGroups::LOWER),
            DisplayCommand::Write("Octopart"),
            DisplayCommand::Blink {
                digits: DigitMask::ALL,
                on_ms: 800,
                off_ms: 400,
            },
        ],
        hold_ms: 5000,
    },
    Scene {
        commands: &[
            DisplayCommand::StopBlink,
            DisplayCommand::WriteGroup(DigitGroup::Upper, "1234"),
            DisplayCommand::DecimalPoints(DigitMask::from_bits(0x20)),
            DisplayCommand::Blink {
                digits: DigitMask::from_bits(0x10),
                on_ms: 400,
                off_ms: 100,
            },
            DisplayCommand::Scroll {
                group: DigitGroup::Lower,
                text: SIGNS,
                delay_ms: 300,
                direction: ScrollDirection::Left,
            },
        ],
        hold_ms: 5000,
    },
    Scene {
        commands: &[
            DisplayCommand::StopBlink,
            DisplayCommand::StopScroll(DigitGroups::BOTH),
            DisplayCommand::DecimalPoints(DigitMask::NONE),
        ],
        hold_ms: 500,
    },
];

/// Showcase task - feeds scenes to the refresh task forever
#[embassy_executor::task]
pub async fn showcase_task() {
    info!("Showcase task started");

    DISPLAY_COMMANDS.send(DisplayCommand::Write(FRAME)).await;
    Timer::after_millis(FRAME_HOLD_MS).await;

    loop {
        for (index, scene) in SCENES.iter().enumerate() {
            debug!("Scene {}", index);
            for &command in scene.commands {
                DISPLAY_COMMANDS.send(command).await;
            }
            Timer::after_millis(scene.hold_ms).await;
        }
    }
}
