//! Metrology front-end data-ready handling
//!
//! The front end pulls DRDY low once per sample block. Each block is
//! reported as a raw line; when the message buffer cannot keep up the
//! lines are dropped and counted, and the count is reported as a warning
//! once space is back.
//!
//! Once blocks have started, a front end that goes silent for
//! [`DRDY_TIMEOUT_MS`] is fatal.

use defmt::*;
use embassy_stm32::exti::ExtiInput;
use embassy_time::{with_timeout, Duration};
use meterkit_core::{message_raw, message_warn};

use crate::channels::MESSAGES;
use crate::fatal::drain_and_reset;

/// Longest gap between two sample blocks
pub const DRDY_TIMEOUT_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn data_ready_task(mut drdy: ExtiInput<'static>) {
    info!("Data-ready task started");

    // Wait as long as it takes for the first block
    drdy.wait_for_falling_edge().await;

    let mut block: u32 = 1;
    let mut dropped: u32 = 0;

    loop {
        if dropped > 0 && message_warn!(MESSAGES, "{} sample lines dropped", dropped).is_ok() {
            dropped = 0;
        }

        if message_raw!(MESSAGES, "DRDY {}\n", block).is_err() {
            dropped += 1;
            trace!("Sample line {} dropped", block);
        }

        let timeout = Duration::from_millis(DRDY_TIMEOUT_MS);
        if with_timeout(timeout, drdy.wait_for_falling_edge()).await.is_err() {
            drain_and_reset("front end stopped sending DRDY").await;
        }
        block = block.wrapping_add(1);
    }
}
