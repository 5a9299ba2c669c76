//! Host UART for STM32
//!
//! The message pipeline needs a transport whose `transmit` returns at
//! once. [`PipeTransport`] copies each submission into an
//! [`embassy_sync::pipe::Pipe`]; [`run_host_uart`] runs as a task, moves
//! the pipe's contents into the DMA-driven USART and marks the transfer
//! complete once the pipe is empty again.
//!
//! The copy costs a third slot-sized buffer. In exchange the DMA never
//! reads slot memory, which stays inside the critical-section mutex of
//! the shared message output. The draining slot's bytes are therefore
//! only a record of the last submission here, not the live DMA source.

use embassy_stm32::usart::{self, Error as UsartError};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;
use embedded_io_async::Write;
use meterkit_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use meterkit_hal::{HostTransport, HostUartError, TransmitError, TxCompletion};

/// Largest chunk handed to the USART DMA in one go
const DMA_CHUNK: usize = 256;

/// Classify an embassy USART error
pub fn host_uart_error(e: UsartError) -> HostUartError {
    match e {
        UsartError::Framing | UsartError::Noise | UsartError::Parity => HostUartError::Line,
        UsartError::Overrun => HostUartError::Overrun,
        UsartError::BufferTooLong => HostUartError::TransferTooLong,
        _ => HostUartError::Other,
    }
}

/// Translate a board-neutral UART config to embassy's
pub fn to_usart_config(config: &UartConfig) -> usart::Config {
    let mut out = usart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => usart::DataBits::DataBits7,
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    out.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    out
}

/// [`HostTransport`] that stages submissions in a pipe
///
/// `N` must be at least the message slot capacity so a full slot fits in
/// one submission.
pub struct PipeTransport<'a, const N: usize> {
    pipe: &'a Pipe<CriticalSectionRawMutex, N>,
    completion: &'a TxCompletion,
}

impl<'a, const N: usize> PipeTransport<'a, N> {
    pub const fn new(pipe: &'a Pipe<CriticalSectionRawMutex, N>, completion: &'a TxCompletion) -> Self {
        Self { pipe, completion }
    }
}

impl<const N: usize> HostTransport for PipeTransport<'_, N> {
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError> {
        if data.len() > N {
            return Err(TransmitError::TooLong);
        }
        if data.len() > self.pipe.free_capacity() {
            return Err(TransmitError::Busy);
        }
        self.completion.begin()?;

        // The ring may wrap, so one submission can take several writes
        let mut rest = data;
        while !rest.is_empty() {
            match self.pipe.try_write(rest) {
                Ok(n) => rest = &rest[n..],
                Err(_) => break,
            }
        }
        Ok(())
    }

    fn is_idle(&self) -> bool {
        self.completion.is_complete()
    }
}

/// Move staged bytes from `pipe` to the USART forever
///
/// Marks `completion` finished each time the pipe runs dry, which is what
/// the pipeline's next flush observes as idle.
///
/// A failed chunk is logged and skipped.
pub async fn run_host_uart<W, const N: usize>(
    pipe: &Pipe<CriticalSectionRawMutex, N>,
    completion: &TxCompletion,
    tx: &mut W,
) -> !
where
    W: Write<Error = UsartError>,
{
    let mut chunk = [0u8; DMA_CHUNK];
    loop {
        let n = pipe.read(&mut chunk).await;
        if let Err(e) = tx.write_all(&chunk[..n]).await {
            let fault = host_uart_error(e);
            #[cfg(feature = "defmt")]
            defmt::warn!("Host UART write failed: {}, {} bytes lost", fault, n);
            #[cfg(not(feature = "defmt"))]
            let _ = fault;
        }
        if pipe.is_empty() {
            completion.finish();
        }
    }
}
