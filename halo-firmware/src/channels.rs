//! Inter-task communication channels
//!
//! Button presses go from the button task to the panel task through a
//! bounded channel. Presses made while a push is on the wire queue up.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use halo_core::InputEvent;

/// Channel capacity for input events from the buttons
const INPUT_CHANNEL_SIZE: usize = 8;

/// Input events from the front buttons
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();
