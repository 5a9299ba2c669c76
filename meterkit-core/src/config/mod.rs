//! Link configuration
//!
//! Buffer sizes are compile-time constants; everything that can change per
//! board build lives in [`LinkConfig`], which the firmware generates from
//! its `board.toml` at build time.

use core::fmt;

use meterkit_hal::UartConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of each of the two message slots
pub const MAX_MSG_STORAGE_SIZE: usize = 10 * 1024;

/// Capacity of the formatter scratch buffer
pub const MAX_MSG_SIZE: usize = 512;

/// UART frame length in bits for 8N1 (start + 8 data + stop)
const BITS_PER_BYTE: u32 = 10;

/// Slowest flush tick that still makes sense for a human reading the log
const MAX_FLUSH_INTERVAL_MS: u32 = 1000;

/// Host link settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkConfig {
    /// Host UART framing and speed
    pub host_uart: UartConfig,
    /// Period of the flush tick
    pub flush_interval_ms: u32,
    /// Flush polls of the drain before a fatal reset, `flush_interval_ms`
    /// apart
    pub drain_polls: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            host_uart: UartConfig::default(),
            flush_interval_ms: 10,
            drain_polls: 500,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate of zero
    ZeroBaudrate,
    /// Flush interval of zero or above one second
    FlushInterval(u32),
    /// Drain budget of zero
    ZeroDrainPolls,
    /// Drain budget shorter than sending both slots takes
    DrainBudget { budget_ms: u64, needed_ms: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBaudrate => f.write_str("host UART baud rate must be non-zero"),
            ConfigError::FlushInterval(ms) => write!(
                f,
                "flush interval {} ms outside 1..={} ms",
                ms, MAX_FLUSH_INTERVAL_MS
            ),
            ConfigError::ZeroDrainPolls => f.write_str("drain polls must be non-zero"),
            ConfigError::DrainBudget {
                budget_ms,
                needed_ms,
            } => write!(
                f,
                "drain budget {} ms cannot empty both slots ({} ms)",
                budget_ms, needed_ms
            ),
        }
    }
}

impl LinkConfig {
    /// Check the settings for values the firmware cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host_uart.baudrate == 0 {
            return Err(ConfigError::ZeroBaudrate);
        }
        if self.flush_interval_ms == 0 || self.flush_interval_ms > MAX_FLUSH_INTERVAL_MS {
            return Err(ConfigError::FlushInterval(self.flush_interval_ms));
        }
        if self.drain_polls == 0 {
            return Err(ConfigError::ZeroDrainPolls);
        }
        let needed_ms = 2 * self.slot_drain_time_ms() as u64;
        let budget_ms = self.drain_budget_ms();
        if budget_ms < needed_ms {
            return Err(ConfigError::DrainBudget {
                budget_ms,
                needed_ms,
            });
        }
        Ok(())
    }

    /// Time a drain may take before giving up
    pub fn drain_budget_ms(&self) -> u64 {
        self.drain_polls as u64 * self.flush_interval_ms as u64
    }

    /// Time the host UART needs to send `bytes`, rounded up
    pub fn transfer_time_ms(&self, bytes: usize) -> u32 {
        let bits = bytes as u64 * BITS_PER_BYTE as u64 * 1000;
        let baud = self.host_uart.baudrate.max(1) as u64;
        bits.div_ceil(baud) as u32
    }

    /// Time to drain one full message slot
    pub fn slot_drain_time_ms(&self) -> u32 {
        self.transfer_time_ms(MAX_MSG_STORAGE_SIZE - 1)
    }
}
