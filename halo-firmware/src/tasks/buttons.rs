//! Front button task
//!
//! One task watches all six buttons. A press is confirmed when the pin is
//! still low after the debounce window. Back distinguishes short and long
//! presses; every other button acts on press.

use defmt::*;
use embassy_futures::select::select_array;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Timer};

use halo_core::InputEvent;

use crate::channels::INPUT_CHANNEL;

/// Number of front buttons
pub const BUTTON_COUNT: usize = 6;

/// Press confirmation window
const DEBOUNCE: Duration = Duration::from_millis(20);

/// Hold time that turns a back press into exit
const LONG_PRESS: Duration = Duration::from_millis(500);

/// Quiet time after release
const RELEASE_DEBOUNCE: Duration = Duration::from_millis(50);

/// Front buttons, in pin array order
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Button {
    /// Next scene
    Right,
    /// Previous scene
    Left,
    /// Brighter
    Up,
    /// Dimmer
    Down,
    /// Re-send the current scene
    Ok,
    /// Short press turns off, long press exits
    Back,
}

impl Button {
    /// All buttons, indexed like the pin array
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::Ok,
        Button::Back,
    ];

    /// Event for a short press
    pub fn short_press(self) -> InputEvent {
        match self {
            Button::Right => InputEvent::Next,
            Button::Left => InputEvent::Previous,
            Button::Up => InputEvent::Brighter,
            Button::Down => InputEvent::Dimmer,
            Button::Ok => InputEvent::Reapply,
            Button::Back => InputEvent::Off,
        }
    }
}

/// Button task: turns pin edges into [`InputEvent`]s
#[embassy_executor::task]
pub async fn buttons_task(mut pins: [Input<'static>; BUTTON_COUNT]) {
    info!("Button task started");

    loop {
        let (_, index) = select_array(pins.each_mut().map(|pin| pin.wait_for_falling_edge())).await;
        let button = Button::ALL[index];
        let pin = &mut pins[index];

        Timer::after(DEBOUNCE).await;
        if pin.is_high() {
            trace!("Button {}: bounce", button);
            continue;
        }

        let event = match button {
            Button::Back => match with_timeout(LONG_PRESS, pin.wait_for_high()).await {
                Ok(()) => InputEvent::Off,
                // Exit goes out while back is still held
                Err(_) => InputEvent::Exit,
            },
            _ => button.short_press(),
        };
        INPUT_CHANNEL.send(event).await;
        debug!("Button {}: {}", button, event);

        pin.wait_for_high().await;
        Timer::after(RELEASE_DEBOUNCE).await;
    }
}
