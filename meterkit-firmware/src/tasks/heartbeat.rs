//! Status LED heartbeat
//!
//! Blinks the status LED and emits a periodic uptime line so the host can
//! tell the board is alive.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};
use meterkit_core::{message, message_debug};
use meterkit_hal::{Board, Led};
use meterkit_hal_stm32::Stm32Board;

use crate::channels::MESSAGES;

/// Heartbeat period in milliseconds
pub const HEARTBEAT_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn heartbeat_task(mut board: Stm32Board<'static>) {
    info!("Heartbeat task started");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_MS));
    let start = Instant::now();
    let mut on = false;

    loop {
        ticker.next().await;
        on = !on;
        board.set_led(Led::Status, on);

        let uptime_s = start.elapsed().as_secs();
        if message!(MESSAGES, "uptime {} s", uptime_s).is_err() {
            warn!("Message buffer full, heartbeat dropped");
            board.set_led(Led::Error, true);
        } else {
            board.set_led(Led::Error, false);
        }
        let _ = message_debug!(MESSAGES, "free {} bytes", MESSAGES.free_space());
    }
}
