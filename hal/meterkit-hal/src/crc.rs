//! CRC engine abstraction
//!
//! Frames exchanged with the front end carry a CRC-16 (polynomial 0x1021,
//! initial value 0xFFFF, no reflection). Boards with a CRC peripheral
//! implement [`CrcEngine`] on it; [`SoftwareCrc16`] is the bit-serial
//! fallback and the reference the hardware paths are tested against.

/// Generator polynomial
pub const CRC16_POLY: u16 = 0x1021;

/// Initial register value
pub const CRC16_INIT: u16 = 0xFFFF;

/// Incremental CRC-16 calculation
pub trait CrcEngine {
    /// Restart from the initial value
    fn reset(&mut self);

    /// Feed more bytes into the running CRC
    fn feed(&mut self, data: &[u8]);

    /// Current CRC value
    fn value(&self) -> u16;

    /// Reset, feed `data`, and return the CRC
    fn calculate(&mut self, data: &[u8]) -> u16 {
        self.reset();
        self.feed(data);
        self.value()
    }
}

/// Bit-serial CRC-16/CCITT-FALSE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftwareCrc16 {
    crc: u16,
}

impl Default for SoftwareCrc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareCrc16 {
    pub const fn new() -> Self {
        Self { crc: CRC16_INIT }
    }
}

impl CrcEngine for SoftwareCrc16 {
    fn reset(&mut self) {
        self.crc = CRC16_INIT;
    }

    fn feed(&mut self, data: &[u8]) {
        for &byte in data {
            self.crc ^= (byte as u16) << 8;
            for _ in 0..8 {
                if self.crc & 0x8000 != 0 {
                    self.crc = (self.crc << 1) ^ CRC16_POLY;
                } else {
                    self.crc <<= 1;
                }
            }
        }
    }

    fn value(&self) -> u16 {
        self.crc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        let mut crc = SoftwareCrc16::new();
        assert_eq!(crc.calculate(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut one_shot = SoftwareCrc16::new();
        let expected = one_shot.calculate(b"ADE9178 frame");

        let mut incremental = SoftwareCrc16::new();
        incremental.feed(b"ADE9178");
        incremental.feed(b" frame");
        assert_eq!(incremental.value(), expected);
    }

    #[test]
    fn test_empty_input_is_init_value() {
        let mut crc = SoftwareCrc16::new();
        assert_eq!(crc.calculate(&[]), CRC16_INIT);
    }
}
