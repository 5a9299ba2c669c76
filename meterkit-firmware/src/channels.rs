//! Shared message output
//!
//! Producers print into [`MESSAGES`]; the flush task submits full slots to
//! [`HOST_PIPE`], which the host UART task drains over DMA.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;
use meterkit_core::{SharedMessages, MAX_MSG_STORAGE_SIZE};
use meterkit_hal::TxCompletion;
use meterkit_hal_stm32::PipeTransport;

/// Bytes on their way to the host UART (one full slot)
pub static HOST_PIPE: Pipe<CriticalSectionRawMutex, MAX_MSG_STORAGE_SIZE> = Pipe::new();

/// Set by the host UART task once the pipe runs dry
pub static HOST_TX_DONE: TxCompletion = TxCompletion::new();

pub type HostTransport = PipeTransport<'static, MAX_MSG_STORAGE_SIZE>;

/// Diagnostic message output for every task
pub static MESSAGES: SharedMessages<HostTransport> =
    SharedMessages::new(PipeTransport::new(&HOST_PIPE, &HOST_TX_DONE));
