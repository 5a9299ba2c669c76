//! GPIO stub

use meterkit_hal::gpio::{Edge, InputPin, InterruptPin, OutputPin};

/// A pin that remembers its level and interrupt configuration
///
/// Reading it back returns the last driven level, or whatever the test set
/// with [`set_input`](Self::set_input).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DummyPin {
    high: bool,
    interrupt: Option<Edge>,
}

impl DummyPin {
    pub const fn new() -> Self {
        Self {
            high: false,
            interrupt: None,
        }
    }

    /// Force the level seen by `is_high`
    pub fn set_input(&mut self, high: bool) {
        self.high = high;
    }

    /// Edge the interrupt is armed for
    pub fn interrupt_edge(&self) -> Option<Edge> {
        self.interrupt
    }
}

impl OutputPin for DummyPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl InputPin for DummyPin {
    fn is_high(&self) -> bool {
        self.high
    }
}

impl InterruptPin for DummyPin {
    fn enable_interrupt(&mut self, edge: Edge) {
        self.interrupt = Some(edge);
    }

    fn disable_interrupt(&mut self) {
        self.interrupt = None;
    }

    fn is_interrupt_enabled(&self) -> bool {
        self.interrupt.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut pin = DummyPin::new();
        pin.toggle();
        assert!(pin.is_set_high());
        pin.toggle();
        assert!(pin.is_low());
    }

    #[test]
    fn test_interrupt_arming() {
        let mut pin = DummyPin::new();
        pin.enable_interrupt(Edge::Falling);
        assert_eq!(pin.interrupt_edge(), Some(Edge::Falling));
        pin.disable_interrupt();
        assert!(!pin.is_interrupt_enabled());
    }
}
