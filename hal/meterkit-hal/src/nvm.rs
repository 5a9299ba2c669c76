//! Non-volatile memory abstraction
//!
//! Calibration and configuration blobs live in on-chip flash or an
//! external FRAM. The trait is byte addressed; implementations deal with
//! page alignment and erase granularity.

use core::fmt;

/// Errors from NVM operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NvmError {
    /// Access outside the device
    OutOfBounds,
    /// Address not aligned to the device's write granularity
    Unaligned,
    /// Write to a location that was not erased
    NotErased,
    /// The underlying device reported a failure
    Device,
}

impl fmt::Display for NvmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NvmError::OutOfBounds => f.write_str("address out of bounds"),
            NvmError::Unaligned => f.write_str("unaligned access"),
            NvmError::NotErased => f.write_str("target not erased"),
            NvmError::Device => f.write_str("device error"),
        }
    }
}

/// Byte-addressed non-volatile memory
pub trait Nvm {
    /// Device size in bytes
    fn size(&self) -> usize;

    /// Read `buf.len()` bytes starting at `offset`
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<(), NvmError>;

    /// Write `data` starting at `offset`
    fn write(&mut self, offset: usize, data: &[u8]) -> Result<(), NvmError>;

    /// Erase `len` bytes starting at `offset`
    fn erase(&mut self, offset: usize, len: usize) -> Result<(), NvmError>;

    /// Check that `[offset, offset + len)` lies inside the device
    fn check_bounds(&self, offset: usize, len: usize) -> Result<(), NvmError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.size() => Ok(()),
            _ => Err(NvmError::OutOfBounds),
        }
    }
}
