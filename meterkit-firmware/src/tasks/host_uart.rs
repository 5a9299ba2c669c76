//! Host UART transmit task

use defmt::*;
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartTx;
use meterkit_hal_stm32::run_host_uart;

use crate::channels::{HOST_PIPE, HOST_TX_DONE};

#[embassy_executor::task]
pub async fn host_uart_task(mut tx: UartTx<'static, Async>) {
    info!("Host UART task started");
    run_host_uart(&HOST_PIPE, &HOST_TX_DONE, &mut tx).await
}
