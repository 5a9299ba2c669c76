//! Host UART abstractions
//!
//! The host UART is the slow byte channel that carries diagnostic messages
//! off the board. Boards expose it as a [`HostTransport`]: a submission is
//! accepted immediately and completes in the background, and completion is
//! observed by polling [`HostTransport::is_idle`], never pushed.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-blocking byte transport towards the host
///
/// # Contract
///
/// - `transmit` returns immediately. The transfer itself completes
///   asynchronously (DMA, interrupt-driven FIFO, ...).
/// - While `is_idle` reports `false` the caller must not submit again.
/// - The caller keeps the submitted bytes untouched until `is_idle`
///   reports `true` again, so implementations may either copy the data or
///   keep transferring from the caller's memory.
pub trait HostTransport {
    /// Start sending `data`
    ///
    /// Must accept any length up to the caller's buffer capacity.
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError>;

    /// Whether no transmission is outstanding
    fn is_idle(&self) -> bool;
}

impl<T: HostTransport + ?Sized> HostTransport for &mut T {
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError> {
        (**self).transmit(data)
    }

    fn is_idle(&self) -> bool {
        (**self).is_idle()
    }
}

/// Errors from [`HostTransport::transmit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitError {
    /// A previous transmission is still in flight
    Busy,
    /// The submission exceeds what the transport can take at once
    TooLong,
}

impl fmt::Display for TransmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransmitError::Busy => f.write_str("transmission in progress"),
            TransmitError::TooLong => f.write_str("submission too long"),
        }
    }
}

/// Line or DMA fault reported by the host UART driver
///
/// Faults never reach the message pipeline; the bytes of the failed
/// transfer are lost and the driver carries on with the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostUartError {
    /// Framing, noise or parity fault on the line
    Line,
    /// Data arrived faster than the driver could move it
    Overrun,
    /// Transfer longer than one DMA request can carry
    TransferTooLong,
    /// Anything the driver does not classify
    Other,
}

impl fmt::Display for HostUartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostUartError::Line => f.write_str("line fault"),
            HostUartError::Overrun => f.write_str("overrun"),
            HostUartError::TransferTooLong => f.write_str("transfer too long for DMA"),
            HostUartError::Other => f.write_str("UART fault"),
        }
    }
}

/// Transmit completion flag
///
/// Set from the UART/DMA completion interrupt and polled from thread
/// context. Starts out complete so the first submission is accepted.
#[derive(Debug)]
pub struct TxCompletion {
    complete: AtomicBool,
}

impl Default for TxCompletion {
    fn default() -> Self {
        Self::new()
    }
}

impl TxCompletion {
    /// Create a flag in the complete state
    pub const fn new() -> Self {
        Self {
            complete: AtomicBool::new(true),
        }
    }

    /// Claim the transport for a new transfer
    ///
    /// Returns [`TransmitError::Busy`] if the previous transfer has not
    /// completed yet.
    pub fn begin(&self) -> Result<(), TransmitError> {
        self.complete
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| TransmitError::Busy)
    }

    /// Mark the current transfer as finished (call from the completion ISR)
    pub fn finish(&self) {
        self.complete.store(true, Ordering::Release);
    }

    /// Check whether no transfer is outstanding
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_starts_complete() {
        let flag = TxCompletion::new();
        assert!(flag.is_complete());
    }

    #[test]
    fn test_completion_rejects_second_begin() {
        let flag = TxCompletion::new();
        assert_eq!(flag.begin(), Ok(()));
        assert!(!flag.is_complete());
        assert_eq!(flag.begin(), Err(TransmitError::Busy));

        flag.finish();
        assert!(flag.is_complete());
        assert_eq!(flag.begin(), Ok(()));
    }

    #[test]
    fn test_completion_claimed_once_across_threads() {
        extern crate std;
        use std::sync::atomic::AtomicUsize;
        use std::thread;

        static FLAG: TxCompletion = TxCompletion::new();
        static CLAIMS: AtomicUsize = AtomicUsize::new(0);

        let handles: std::vec::Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    if FLAG.begin().is_ok() {
                        CLAIMS.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(CLAIMS.load(Ordering::SeqCst), 1);
        assert!(!FLAG.is_complete());
    }

    #[test]
    fn test_host_uart_error_display() {
        extern crate std;
        use std::string::ToString;

        assert_eq!(HostUartError::Line.to_string(), "line fault");
        assert_eq!(
            HostUartError::TransferTooLong.to_string(),
            "transfer too long for DMA"
        );
    }

    #[test]
    fn test_default_config_is_115200_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 115200);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }
}
