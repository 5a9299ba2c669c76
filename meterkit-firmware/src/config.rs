//! Board configuration
//!
//! Generated by build.rs from board.toml, already validated.

use meterkit_core::LinkConfig;
use meterkit_hal::uart::{DataBits, Parity, StopBits, UartConfig};

include!(concat!(env!("OUT_DIR"), "/link_config.rs"));
