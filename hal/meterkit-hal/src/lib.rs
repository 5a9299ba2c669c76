//! Meterkit Hardware Abstraction Layer
//!
//! This crate defines the vendor-neutral contract between the metering
//! application and the evaluation board it runs on. Each board crate
//! (dummy stub, STM32, ...) implements these traits on top of its vendor
//! SDK, so the application and the diagnostic message pipeline never touch
//! registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / meterkit-core messages   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  meterkit-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ meterkit-hal- │       │ meterkit-hal- │
//! │     dummy     │       │     stm32     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::HostTransport`] - Non-blocking host UART submission
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`] - SPI link to the metering front end
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`crc::CrcEngine`] - CRC-16 over byte streams
//! - [`timer::DelayMs`], [`timer::MonotonicClock`] - Time base
//! - [`nvm::Nvm`] - Non-volatile memory
//! - [`board::Board`] - Board-level bring-up and reset

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod crc;
pub mod gpio;
pub mod i2c;
pub mod nvm;
pub mod spi;
pub mod timer;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use board::{Board, BoardError, GpioBoard, Led};
pub use crc::{CrcEngine, SoftwareCrc16};
pub use gpio::{InputPin, OutputPin};
pub use i2c::I2cBus;
pub use nvm::{Nvm, NvmError};
pub use spi::SpiBus;
pub use timer::{DelayMs, MonotonicClock};
pub use uart::{HostTransport, HostUartError, TransmitError, TxCompletion, UartConfig};
