//! GPIO abstractions
//!
//! Covers the handful of pins the metering application drives directly:
//! front-end reset lines, status LEDs, and the data-ready input whose
//! falling edge starts a sample read.

/// Digital output pin (reset lines, LEDs)
pub trait OutputPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);

    /// Drive the pin to `high`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Invert the current output level
    fn toggle(&mut self) {
        let high = self.is_set_high();
        self.set_state(!high);
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high
    fn is_high(&self) -> bool;

    /// Check if the pin reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Edge that triggers a pin interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
    Both,
}

/// Input pin that can raise an interrupt
///
/// The data-ready line of the front end is configured for
/// [`Edge::Falling`]; the board's ISR forwards the event to the
/// application.
pub trait InterruptPin: InputPin {
    /// Arm the interrupt for `edge`
    fn enable_interrupt(&mut self, edge: Edge);

    /// Disarm the interrupt
    fn disable_interrupt(&mut self);

    /// Whether the interrupt is currently armed
    fn is_interrupt_enabled(&self) -> bool;
}
