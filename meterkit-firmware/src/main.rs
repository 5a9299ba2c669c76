//! Meterkit - Energy Metering Evaluation Firmware
//!
//! Firmware for the STM32H563 application board. Samples the metrology
//! front end and streams diagnostic messages to the host over USART3
//! (the NUCLEO's ST-LINK virtual COM port).

#![no_std]
#![no_main]

mod channels;
mod config;
mod fatal;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::usart::UartTx;
use meterkit_core::{message, message_error};
use meterkit_hal::{Board, BoardError, GpioBoard};
use meterkit_hal_stm32::{to_usart_config, EmbassyDelay, Stm32Output};
use {defmt_rtt as _, panic_probe as _};

use crate::channels::MESSAGES;
use crate::config::LINK;
use crate::tasks::{data_ready_task, flush_task, heartbeat_task, host_uart_task};

bind_interrupts!(struct Irqs {
    EXTI13 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI13>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Meterkit firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // Host UART (PD8=TX)
    let usart_config = to_usart_config(&LINK.host_uart);
    let host_tx = match UartTx::new(p.USART3, p.PD8, p.GPDMA1_CH0, usart_config) {
        Ok(tx) => Some(tx),
        Err(e) => {
            error!("{}: {:?}", BoardError::HostUartInit, e);
            None
        }
    };

    // Status LED (PB0), error LED (PB14), front-end reset (PG0, active low)
    let mut board = GpioBoard::new(
        Stm32Output::new(Output::new(p.PB0, Level::Low, Speed::Low)),
        Stm32Output::new(Output::new(p.PB14, Level::Low, Speed::Low)),
        Stm32Output::new(Output::new(p.PG0, Level::Low, Speed::Low)),
        EmbassyDelay,
    );
    if let Err(e) = board.init().and_then(|()| board.reset_front_end()) {
        error!("Board bring-up failed: {}", e);
    }

    // Metrology DRDY (PC13, active low)
    let drdy = ExtiInput::new(p.PC13, p.EXTI13, Pull::Up, Irqs);

    let _ = message!(
        MESSAGES,
        "meterkit {} @ {} baud",
        env!("CARGO_PKG_VERSION"),
        LINK.host_uart.baudrate
    );

    match host_tx {
        Some(tx) => spawner.spawn(host_uart_task(tx)).unwrap(),
        // Messages still queue up; nothing ever drains them
        None => {
            let _ = message_error!(MESSAGES, "host UART unavailable");
        }
    }
    spawner.spawn(flush_task()).unwrap();
    spawner.spawn(heartbeat_task(board)).unwrap();
    spawner.spawn(data_ready_task(drdy)).unwrap();

    info!("All tasks spawned");
}
