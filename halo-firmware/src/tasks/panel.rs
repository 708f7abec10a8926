//! Panel task
//!
//! Owns the panel and the bit-banged bus. Waits out the panel's boot
//! window, shows the first scene, then handles one input event at a time
//! until exit.

use defmt::*;
use embassy_rp::gpio::OutputOpenDrain;
use embassy_time::{Delay, Duration, Timer};

use halo_core::scene::scene;
use halo_core::{Action, Panel};
use halo_drivers::{BitBangI2c, GpioLines};
use halo_protocol::PushReport;

use crate::channels::INPUT_CHANNEL;

/// Panel over the board's CLOCK/DATA pins
pub type BoardPanel =
    Panel<BitBangI2c<GpioLines<OutputOpenDrain<'static>, OutputOpenDrain<'static>, Delay>>>;

/// Panel task
#[embassy_executor::task]
pub async fn panel_task(mut panel: BoardPanel, boot_delay_ms: u16) {
    info!("Panel task started, waiting {} ms for panel boot", boot_delay_ms);
    Timer::after(Duration::from_millis(boot_delay_ms as u64)).await;

    let report = panel.start();
    check_report(report);
    log_status(&panel);

    loop {
        let event = INPUT_CHANNEL.receive().await;
        debug!("Input: {}", event);

        let outcome = panel.handle(event);
        check_report(outcome.report);

        match outcome.action {
            Action::Render => log_status(&panel),
            Action::Off => info!("Panel off"),
            Action::Exit => break,
        }
    }

    info!("Panel off, input closed");

    // Keep the blank frame on the panel; nothing else drives the pins
    loop {
        Timer::after_secs(60).await;
        trace!("Panel task parked");
    }
}

fn check_report(report: PushReport) {
    trace!(
        "Push: {} of {} sequences acknowledged",
        report.delivered,
        report.attempts
    );
    if report.is_silent() {
        warn!("Panel did not acknowledge any sequence");
    }
}

fn log_status(panel: &BoardPanel) {
    let [step, brightness, label] = panel.status().lines();
    info!("{} | {} | {}", step.as_str(), brightness.as_str(), label.as_str());
    if let Some(scene) = scene(panel.session().scene()) {
        trace!("Scene: {}", scene);
    }
}
