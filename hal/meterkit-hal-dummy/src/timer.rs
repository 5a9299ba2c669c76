//! Time base stubs

use core::cell::Cell;

use meterkit_hal::timer::{DelayMs, MonotonicClock};

/// Delay that returns immediately and adds up what was requested
#[derive(Debug, Default)]
pub struct DummyDelay {
    total_ms: u64,
}

impl DummyDelay {
    pub const fn new() -> Self {
        Self { total_ms: 0 }
    }

    /// Sum of all requested delays
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }
}

impl DelayMs for DummyDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms as u64;
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct DummyClock {
    now_ms: Cell<u32>,
}

impl DummyClock {
    pub const fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
        }
    }

    pub fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(ms));
    }
}

impl MonotonicClock for DummyClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}
