//! Fatal-error shutdown

use cortex_m::peripheral::SCB;
use defmt::*;
use embassy_time::{Duration, Timer};
use meterkit_core::message_error;

use crate::channels::MESSAGES;
use crate::config::LINK;

/// Report `reason`, get queued messages out, then reset the MCU
///
/// Polls a flush every `flush_interval_ms` for at most `drain_polls`
/// polls, which build.rs checked is enough for both slots.
pub async fn drain_and_reset(reason: &str) -> ! {
    error!("Fatal: {}", reason);
    let _ = message_error!(MESSAGES, "{}, resetting", reason);

    let pause = Duration::from_millis(LINK.flush_interval_ms as u64);
    if MESSAGES
        .drain_paced(LINK.drain_polls, || Timer::after(pause))
        .await
        .is_err()
    {
        warn!("Messages still pending at reset");
    }

    SCB::sys_reset()
}
