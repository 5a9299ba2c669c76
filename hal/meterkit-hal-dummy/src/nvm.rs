//! RAM-backed NVM

use meterkit_hal::nvm::{Nvm, NvmError};

/// Value of an erased byte
pub const ERASED: u8 = 0xFF;

/// `N` bytes of RAM that behave like NOR flash
///
/// Writes only succeed on erased bytes, erase sets bytes back to
/// [`ERASED`].
#[derive(Debug, Clone)]
pub struct RamNvm<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Default for RamNvm<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RamNvm<N> {
    pub const fn new() -> Self {
        Self { bytes: [ERASED; N] }
    }
}

impl<const N: usize> Nvm for RamNvm<N> {
    fn size(&self) -> usize {
        N
    }

    fn read(&mut self, offset: usize, buf: &mut [u8]) -> Result<(), NvmError> {
        self.check_bounds(offset, buf.len())?;
        buf.copy_from_slice(&self.bytes[offset..offset + buf.len()]);
        Ok(())
    }

    fn write(&mut self, offset: usize, data: &[u8]) -> Result<(), NvmError> {
        self.check_bounds(offset, data.len())?;
        let target = &mut self.bytes[offset..offset + data.len()];
        if target.iter().any(|&b| b != ERASED) {
            return Err(NvmError::NotErased);
        }
        target.copy_from_slice(data);
        Ok(())
    }

    fn erase(&mut self, offset: usize, len: usize) -> Result<(), NvmError> {
        self.check_bounds(offset, len)?;
        self.bytes[offset..offset + len].fill(ERASED);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_back() {
        let mut nvm: RamNvm<64> = RamNvm::new();
        nvm.write(8, b"cal").unwrap();
        let mut buf = [0u8; 3];
        nvm.read(8, &mut buf).unwrap();
        assert_eq!(&buf, b"cal");
    }

    #[test]
    fn test_write_requires_erase() {
        let mut nvm: RamNvm<16> = RamNvm::new();
        nvm.write(0, &[1, 2]).unwrap();
        assert_eq!(nvm.write(1, &[3]), Err(NvmError::NotErased));

        nvm.erase(0, 2).unwrap();
        assert_eq!(nvm.write(1, &[3]), Ok(()));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut nvm: RamNvm<16> = RamNvm::new();
        let mut buf = [0u8; 4];
        assert_eq!(nvm.read(14, &mut buf), Err(NvmError::OutOfBounds));
        assert_eq!(nvm.erase(usize::MAX, 2), Err(NvmError::OutOfBounds));
    }
}
