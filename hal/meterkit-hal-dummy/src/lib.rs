//! Dummy board for meterkit
//!
//! A template board where every peripheral call succeeds without touching
//! hardware. It is what new board ports start from, and what host-side
//! tests run the message pipeline against.
//!
//! The host UART can either complete transfers immediately (like a real
//! board whose DMA is infinitely fast) or hold them until
//! [`DummyHostUart::complete`] is called, which stands in for the TX
//! completion interrupt.

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod gpio;
pub mod i2c;
pub mod nvm;
pub mod spi;
pub mod timer;
pub mod uart;

pub use board::{dummy_board, DummyBoard};
pub use gpio::DummyPin;
pub use i2c::DummyI2c;
pub use meterkit_hal::SoftwareCrc16 as DummyCrc;
pub use nvm::RamNvm;
pub use spi::DummySpi;
pub use timer::{DummyClock, DummyDelay};
pub use uart::DummyHostUart;
