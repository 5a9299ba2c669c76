//! Time base abstractions

/// Blocking millisecond delay
///
/// Only used during bring-up (reset pulses, power-on settling). Never call
/// from the message path.
pub trait DelayMs {
    fn delay_ms(&mut self, ms: u32);
}

/// Free-running millisecond clock
pub trait MonotonicClock {
    /// Milliseconds since the clock was started (wraps at `u32::MAX`)
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `earlier`, tolerating one wrap
    fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier)
    }
}
