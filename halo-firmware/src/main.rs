//! Halo panel firmware for RP2040
//!
//! Drives the segment/halo panel over two bit-banged open-drain lines and
//! steps through the scene catalogue from six front buttons.
//!
//! Pins:
//! - GP4: DATA (open drain, external pull-up)
//! - GP5: CLOCK (open drain, external pull-up)
//! - GP10..GP15: right, left, up, down, ok, back (to ground, internal pull-up)

#![no_std]
#![no_main]

mod channels;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, OutputOpenDrain, Pull};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use halo_core::{Panel, PanelConfig};
use halo_drivers::{BitBangI2c, GpioLines};

use crate::tasks::Button;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Halo firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = PanelConfig::default();
    info!(
        "Panel at 0x{:02x}, {} us bit delay (~{} Hz), {} repeats per push",
        config.address,
        config.bit_delay_us,
        config.timing().approx_frequency_hz(),
        config.push_repeats
    );

    // Both lines idle released (high)
    let data = OutputOpenDrain::new(p.PIN_4, Level::High);
    let clock = OutputOpenDrain::new(p.PIN_5, Level::High);
    let lines = GpioLines::new(clock, data, Delay);
    let bus = BitBangI2c::new(lines, config.timing());
    let panel = Panel::new(bus, &config);
    info!("Bus lines initialized");

    let buttons = [
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    ];
    info!("Buttons initialized: {}", Button::ALL);

    spawner.spawn(tasks::buttons_task(buttons)).unwrap();
    spawner
        .spawn(tasks::panel_task(panel, config.boot_delay_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
