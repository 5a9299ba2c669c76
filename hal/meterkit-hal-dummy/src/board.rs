//! Dummy board bring-up

use meterkit_hal::board::GpioBoard;

use crate::gpio::DummyPin;
use crate::timer::DummyDelay;

/// Board whose pins and delays only exist in memory
pub type DummyBoard = GpioBoard<DummyPin, DummyDelay>;

/// A dummy board with all pins low and nothing delayed yet
pub const fn dummy_board() -> DummyBoard {
    GpioBoard::new(DummyPin::new(), DummyPin::new(), DummyPin::new(), DummyDelay::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meterkit_hal::board::{Board, BoardError, Led, RESET_PULSE_MS};
    use meterkit_hal::gpio::OutputPin;

    #[test]
    fn test_reset_requires_init() {
        let mut board = dummy_board();
        assert_eq!(board.reset_front_end(), Err(BoardError::Init));

        board.init().unwrap();
        board.reset_front_end().unwrap();
        assert!(board.reset_pin().is_set_high());
        assert_eq!(board.resets(), 1);
        assert_eq!(board.delay().total_ms(), RESET_PULSE_MS as u64);
    }

    #[test]
    fn test_leds() {
        let mut board = dummy_board();
        board.init().unwrap();
        board.set_led(Led::Error, true);
        assert!(board.led(Led::Error).is_set_high());
        assert!(!board.led(Led::Status).is_set_high());
    }
}
