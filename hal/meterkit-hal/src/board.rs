//! Board-level bring-up
//!
//! Everything that is one call per board rather than one call per
//! peripheral: initialization, front-end reset, status LEDs.

use core::fmt;

use crate::gpio::OutputPin;
use crate::timer::DelayMs;

/// Status LEDs present on every supported board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Heartbeat / activity
    Status,
    /// Error indication
    Error,
}

/// Errors from board bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    SpiInit,
    HostUartInit,
    WaveformUartInit,
    GpioInit,
    DmaChannel,
    Init,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            BoardError::SpiInit => "SPI init failed",
            BoardError::HostUartInit => "host UART init failed",
            BoardError::WaveformUartInit => "waveform UART init failed",
            BoardError::GpioInit => "GPIO init failed",
            BoardError::DmaChannel => "DMA channel unavailable",
            BoardError::Init => "board init failed",
        };
        f.write_str(what)
    }
}

/// A supported evaluation board
pub trait Board {
    /// Bring up clocks and peripherals
    fn init(&mut self) -> Result<(), BoardError>;

    /// Pulse the reset line of the metering front end
    fn reset_front_end(&mut self) -> Result<(), BoardError>;

    /// Switch an LED on or off
    fn set_led(&mut self, led: Led, on: bool);
}

/// Length of the front-end reset pulse
pub const RESET_PULSE_MS: u32 = 1;

/// Board made of plain pins: two LEDs and an active-low front-end reset
///
/// Covers every board whose bring-up is pin-level only. The vendor
/// crates supply the pin and delay types.
#[derive(Debug, Default)]
pub struct GpioBoard<O, D> {
    status_led: O,
    error_led: O,
    reset_pin: O,
    delay: D,
    initialized: bool,
    resets: u32,
}

impl<O, D> GpioBoard<O, D> {
    pub const fn new(status_led: O, error_led: O, reset_pin: O, delay: D) -> Self {
        Self {
            status_led,
            error_led,
            reset_pin,
            delay,
            initialized: false,
            resets: 0,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of front-end reset pulses issued
    pub fn resets(&self) -> u32 {
        self.resets
    }

    pub fn led(&self, led: Led) -> &O {
        match led {
            Led::Status => &self.status_led,
            Led::Error => &self.error_led,
        }
    }

    pub fn reset_pin(&self) -> &O {
        &self.reset_pin
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}

impl<O: OutputPin, D: DelayMs> Board for GpioBoard<O, D> {
    fn init(&mut self) -> Result<(), BoardError> {
        // Reset is active low; release it
        self.reset_pin.set_high();
        self.status_led.set_low();
        self.error_led.set_low();
        self.initialized = true;
        Ok(())
    }

    fn reset_front_end(&mut self) -> Result<(), BoardError> {
        if !self.initialized {
            return Err(BoardError::Init);
        }
        self.reset_pin.set_low();
        self.delay.delay_ms(RESET_PULSE_MS);
        self.reset_pin.set_high();
        self.resets += 1;
        Ok(())
    }

    fn set_led(&mut self, led: Led, on: bool) {
        match led {
            Led::Status => self.status_led.set_state(on),
            Led::Error => self.error_led.set_state(on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock pin that counts level changes
    #[derive(Default)]
    struct MockPin {
        high: bool,
        edges: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ms: u32,
    }

    impl DelayMs for MockDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
        }
    }

    fn board() -> GpioBoard<MockPin, MockDelay> {
        GpioBoard::default()
    }

    #[test]
    fn test_init_releases_reset() {
        let mut b = board();
        b.init().unwrap();
        assert!(b.is_initialized());
        assert!(b.reset_pin().is_set_high());
        assert!(!b.led(Led::Status).is_set_high());
    }

    #[test]
    fn test_reset_pulse() {
        let mut b = board();
        assert_eq!(b.reset_front_end(), Err(BoardError::Init));

        b.init().unwrap();
        b.reset_front_end().unwrap();
        // released by init, then low and high again
        assert_eq!(b.reset_pin().edges, 3);
        assert!(b.reset_pin().is_set_high());
        assert_eq!(b.delay().total_ms, RESET_PULSE_MS);
        assert_eq!(b.resets(), 1);
    }

    #[test]
    fn test_set_led() {
        let mut b = board();
        b.init().unwrap();
        b.set_led(Led::Error, true);
        assert!(b.led(Led::Error).is_set_high());
        assert!(!b.led(Led::Status).is_set_high());
    }
}
