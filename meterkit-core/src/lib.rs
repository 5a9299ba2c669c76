//! Board-agnostic core logic for meterkit firmware
//!
//! This crate contains the parts of the firmware that do not depend on a
//! specific evaluation board:
//!
//! - Diagnostic message pipeline (double-buffered host UART output)
//! - Bounded message formatter and the `message*!` macros
//! - Link configuration types and compile-time buffer sizes

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod message;

pub use config::{ConfigError, LinkConfig, MAX_MSG_SIZE, MAX_MSG_STORAGE_SIZE};
pub use message::{
    Formatter, MessageError, MessageKind, MessagePipeline, Messages, SharedMessages, SlotId,
    SlotState,
};
