//! Host UART stub

use heapless::Vec;
use meterkit_hal::{HostTransport, TransmitError, TxCompletion};

/// Host UART that keeps the first `N` bytes it is asked to send
///
/// With `auto_complete` set every transfer finishes inside `transmit`;
/// otherwise the UART stays busy until [`complete`](Self::complete).
pub struct DummyHostUart<const N: usize = 0> {
    completion: TxCompletion,
    auto_complete: bool,
    captured: Vec<u8, N>,
    submissions: u32,
    bytes_sent: usize,
}

impl<const N: usize> DummyHostUart<N> {
    /// UART whose transfers finish immediately
    pub const fn new() -> Self {
        Self::with_auto_complete(true)
    }

    /// UART that stays busy until [`complete`](Self::complete) is called
    pub const fn manual() -> Self {
        Self::with_auto_complete(false)
    }

    const fn with_auto_complete(auto_complete: bool) -> Self {
        Self {
            completion: TxCompletion::new(),
            auto_complete,
            captured: Vec::new(),
            submissions: 0,
            bytes_sent: 0,
        }
    }

    /// Finish the outstanding transfer
    pub fn complete(&mut self) {
        self.completion.finish();
    }

    /// The first `N` bytes ever submitted, in order
    pub fn captured(&self) -> &[u8] {
        &self.captured
    }

    /// Forget the captured bytes
    pub fn clear_captured(&mut self) {
        self.captured.clear();
    }

    /// Number of accepted submissions
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Total bytes accepted, captured or not
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }
}

impl<const N: usize> Default for DummyHostUart<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HostTransport for DummyHostUart<N> {
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError> {
        self.completion.begin()?;

        let room = N - self.captured.len();
        let keep = data.len().min(room);
        let _ = self.captured.extend_from_slice(&data[..keep]);
        self.submissions += 1;
        self.bytes_sent += data.len();

        if self.auto_complete {
            self.completion.finish();
        }
        Ok(())
    }

    fn is_idle(&self) -> bool {
        self.completion.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_complete() {
        let mut uart: DummyHostUart<16> = DummyHostUart::new();
        uart.transmit(b"abc").unwrap();
        assert!(uart.is_idle());
        uart.transmit(b"def").unwrap();
        assert_eq!(uart.captured(), b"abcdef");
        assert_eq!(uart.submissions(), 2);
    }

    #[test]
    fn test_manual_stays_busy() {
        let mut uart: DummyHostUart<16> = DummyHostUart::manual();
        uart.transmit(b"abc").unwrap();
        assert!(!uart.is_idle());
        assert_eq!(uart.transmit(b"def"), Err(TransmitError::Busy));

        uart.complete();
        assert!(uart.is_idle());
        assert_eq!(uart.captured(), b"abc");
    }

    #[test]
    fn test_capture_is_bounded() {
        let mut uart: DummyHostUart<4> = DummyHostUart::new();
        uart.transmit(b"abcdef").unwrap();
        assert_eq!(uart.captured(), b"abcd");
        assert_eq!(uart.bytes_sent(), 6);
    }

    #[test]
    fn test_zero_capture_discards() {
        let mut uart: DummyHostUart = DummyHostUart::new();
        uart.transmit(b"gone").unwrap();
        assert!(uart.captured().is_empty());
        assert_eq!(uart.bytes_sent(), 4);
    }
}
