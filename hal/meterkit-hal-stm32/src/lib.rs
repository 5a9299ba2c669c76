//! STM32H5/H7 glue for meterkit boards
//!
//! This crate provides the STM32-specific pieces that sit between
//! `meterkit-hal` traits and `embassy-stm32`:
//!
//! - STM32H563ZI (application MCU board)
//! - STM32H735IG
//!
//! # Features
//!
//! - `stm32h563zi`, `stm32h735ig` - Chip selection (enable exactly one)
//! - `defmt` - Enable debug formatting support
//!
//! Peripheral bring-up itself happens in the firmware with embassy-stm32
//! directly; this crate supplies the trait impls for pins and time, config
//! conversion, error mapping, and the host UART transport used by the
//! message pipeline.

#![no_std]

pub mod gpio;
pub mod timer;
pub mod uart;

use meterkit_hal::GpioBoard;

pub use gpio::Stm32Output;
pub use timer::{EmbassyClock, EmbassyDelay};
pub use uart::{host_uart_error, run_host_uart, to_usart_config, PipeTransport};

/// Pin-level STM32 board: status LED, error LED, front-end reset
pub type Stm32Board<'d> = GpioBoard<Stm32Output<'d>, EmbassyDelay>;
