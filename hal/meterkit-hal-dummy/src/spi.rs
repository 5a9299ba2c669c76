//! SPI stub

use core::convert::Infallible;

use meterkit_hal::spi::{SpiBus, SpiConfig};

/// SPI bus that reads back zeros
#[derive(Debug, Default)]
pub struct DummySpi {
    config: SpiConfig,
    bytes_written: usize,
}

impl DummySpi {
    pub fn new(config: SpiConfig) -> Self {
        Self {
            config,
            bytes_written: 0,
        }
    }

    pub fn config(&self) -> &SpiConfig {
        &self.config
    }

    /// Bytes clocked out so far
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}

impl SpiBus for DummySpi {
    type Error = Infallible;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.bytes_written += write.len();
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bytes_written += data.len();
        Ok(())
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<(), Self::Error> {
        self.config.frequency = frequency;
        Ok(())
    }
}
