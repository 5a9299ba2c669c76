//! GPIO for STM32

use embassy_stm32::gpio::Output;
use meterkit_hal::gpio::OutputPin;

/// Push-pull output driven through embassy
pub struct Stm32Output<'d>(Output<'d>);

impl<'d> Stm32Output<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for Stm32Output<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }
}
