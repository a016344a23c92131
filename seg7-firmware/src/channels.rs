//! Inter-task communication channels
//!
//! The refresh task owns the display; every other task changes it by
//! sending a `DisplayCommand` here. Commands are applied between refresh
//! passes, so they take effect on the next pass.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::command::DisplayCommand;

/// Channel capacity for display commands
const COMMAND_CHANNEL_SIZE: usize = 8;

/// Commands for the refresh task
pub static DISPLAY_COMMANDS: Channel<CriticalSectionRawMutex, DisplayCommand, COMMAND_CHANNEL_SIZE> =
    Channel::new();
