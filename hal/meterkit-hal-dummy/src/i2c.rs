//! I2C stub

use core::convert::Infallible;

use meterkit_hal::i2c::{I2cBus, I2cConfig};

/// I2C bus where every device answers with zeros
#[derive(Debug, Default)]
pub struct DummyI2c {
    config: I2cConfig,
    last_address: Option<u8>,
}

impl DummyI2c {
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            last_address: None,
        }
    }

    pub fn config(&self) -> &I2cConfig {
        &self.config
    }

    /// Address of the most recent transaction
    pub fn last_address(&self) -> Option<u8> {
        self.last_address
    }
}

impl I2cBus for DummyI2c {
    type Error = Infallible;

    fn write(&mut self, address: u8, _data: &[u8]) -> Result<(), Self::Error> {
        self.last_address = Some(address);
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.last_address = Some(address);
        buf.fill(0);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        _write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.read(address, read_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_tracks_address() {
        let mut i2c = DummyI2c::new(I2cConfig::FAST);
        let mut buf = [0xFFu8; 2];
        i2c.write_read(0x50, &[0x00], &mut buf).unwrap();
        assert_eq!(buf, [0, 0]);
        assert_eq!(i2c.last_address(), Some(0x50));
        assert_eq!(i2c.config().frequency, 400_000);
    }
}
