//! Fixed-capacity message slots

use super::MessageError;

/// Identifies one of the two slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotId {
    A,
    B,
}

impl SlotId {
    /// The slot that is not `self`
    pub const fn other(self) -> Self {
        match self {
            SlotId::A => SlotId::B,
            SlotId::B => SlotId::A,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            SlotId::A => 0,
            SlotId::B => 1,
        }
    }
}

/// Slot state as seen by the transport
///
/// `Idle → Draining` on a flush handoff, `Draining → Idle` when a later
/// flush observes the transport idle again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotState {
    Idle,
    Draining,
}

/// A byte buffer with a write cursor
///
/// One byte of the capacity is reserved, so at most `C - 1` bytes can be
/// queued.
#[derive(Debug, Clone)]
pub struct Slot<const C: usize> {
    bytes: [u8; C],
    cursor: usize,
}

impl<const C: usize> Default for Slot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> Slot<C> {
    const NONZERO: () = assert!(C > 0, "slot capacity must be at least one byte");

    /// Create an empty slot
    pub const fn new() -> Self {
        let () = Self::NONZERO;
        Self {
            bytes: [0; C],
            cursor: 0,
        }
    }

    /// Bytes that can still be appended
    pub const fn free_space(&self) -> usize {
        C - self.cursor - 1
    }

    /// Number of queued bytes
    pub const fn len(&self) -> usize {
        self.cursor
    }

    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// The queued bytes, oldest first
    pub fn queued(&self) -> &[u8] {
        &self.bytes[..self.cursor]
    }

    /// Copy `data` behind the queued bytes
    ///
    /// All or nothing: on overflow the slot is left untouched.
    pub fn try_append(&mut self, data: &[u8]) -> Result<(), MessageError> {
        if data.len() > self.free_space() {
            return Err(MessageError::Overflow);
        }
        let end = self.cursor + data.len();
        self.bytes[self.cursor..end].copy_from_slice(data);
        self.cursor = end;
        Ok(())
    }

    /// Forget the queued bytes
    ///
    /// The memory is not zeroed; it is overwritten by later appends.
    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// The whole backing buffer, including bytes past the cursor
    pub fn raw(&self) -> &[u8; C] {
        &self.bytes
    }
}
