//! Time base for STM32 on the embassy time driver

use embassy_time::{block_for, Duration, Instant};
use meterkit_hal::timer::{DelayMs, MonotonicClock};

/// Busy-wait delay for bring-up
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyDelay;

impl DelayMs for EmbassyDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}

/// Milliseconds since boot
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
