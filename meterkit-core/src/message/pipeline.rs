//! Double-buffered transport pipeline

use core::fmt;

use meterkit_hal::HostTransport;

use super::slot::{Slot, SlotId, SlotState};
use super::MessageError;

/// Two message slots and the transport they drain into
///
/// Producers only ever touch the active slot through [`append`]. The other
/// slot belongs to the transport from the moment [`flush`] hands it over
/// until a later flush observes the transport idle.
///
/// # Context
///
/// `flush` must not preempt an `append` that is mid-copy. Either call both
/// from the same priority level or go through [`SharedMessages`], which
/// serializes them in a critical section.
///
/// [`append`]: MessagePipeline::append
/// [`flush`]: MessagePipeline::flush
/// [`SharedMessages`]: super::SharedMessages
pub struct MessagePipeline<T, const C: usize> {
    slots: [Slot<C>; 2],
    active: SlotId,
    draining: Option<SlotId>,
    transport: T,
}

impl<T, const C: usize> MessagePipeline<T, C> {
    /// Create a pipeline with slot A active and nothing queued
    pub const fn new(transport: T) -> Self {
        Self {
            slots: [Slot::new(), Slot::new()],
            active: SlotId::A,
            draining: None,
            transport,
        }
    }

    /// Drop everything queued and make slot A active again
    ///
    /// Meant for startup. Calling it while a slot is draining lets the next
    /// appends overwrite memory the transport may still be reading.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.active = SlotId::A;
        self.draining = None;
    }

    /// Queue `bytes` in the active slot
    ///
    /// Fails with [`MessageError::Overflow`] without writing anything if the
    /// bytes do not fit. Never blocks and never swaps slots.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), MessageError> {
        self.slots[self.active.index()].try_append(bytes)
    }

    /// Bytes that still fit in the active slot
    pub fn free_space(&self) -> usize {
        self.active().free_space()
    }

    /// Bytes queued in the active slot
    pub fn queued(&self) -> usize {
        self.active().len()
    }

    /// The slot producers currently write to
    pub fn active_slot(&self) -> SlotId {
        self.active
    }

    /// The slot last handed to the transport, until a flush sees it finish
    pub fn draining_slot(&self) -> Option<SlotId> {
        self.draining
    }

    pub fn slot_state(&self, id: SlotId) -> SlotState {
        if self.draining == Some(id) {
            SlotState::Draining
        } else {
            SlotState::Idle
        }
    }

    /// Read-only view of a slot
    pub fn slot(&self, id: SlotId) -> &Slot<C> {
        &self.slots[id.index()]
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn active(&self) -> &Slot<C> {
        &self.slots[self.active.index()]
    }
}

impl<T: HostTransport, const C: usize> MessagePipeline<T, C> {
    /// Hand the active slot to the transport if it is idle
    ///
    /// Submits only when the transport reports idle *and* something is
    /// queued; on submission the other slot becomes active with its cursor
    /// reset. Never waits and never resubmits.
    ///
    /// Returns [`MessageError::Pending`] while the transport is busy or
    /// bytes remain queued, so callers know to flush again on a later tick.
    pub fn flush(&mut self) -> Result<(), MessageError> {
        if self.transport.is_idle() {
            self.draining = None;
            if !self.active().is_empty() {
                self.submit();
            }
        }
        self.status()
    }

    /// Flush until everything is out or `max_polls` flushes were spent
    ///
    /// Busy-waits. Only for paths that must get messages out before going
    /// down (fatal errors, reset requests).
    pub fn drain(&mut self, max_polls: u32) -> Result<(), MessageError> {
        for _ in 0..max_polls {
            if self.flush().is_ok() {
                return Ok(());
            }
        }
        self.status()
    }

    /// `Ok` when the transport is idle and nothing is queued
    pub fn status(&self) -> Result<(), MessageError> {
        if !self.transport.is_idle() || !self.active().is_empty() {
            Err(MessageError::Pending)
        } else {
            Ok(())
        }
    }

    fn submit(&mut self) {
        let current = self.active;
        // A rejected submission keeps its bytes queued for the next flush.
        if self
            .transport
            .transmit(self.slots[current.index()].queued())
            .is_err()
        {
            return;
        }
        self.draining = Some(current);
        self.active = current.other();
        self.slots[self.active.index()].clear();
    }
}

/// Raw writes straight into the active slot
///
/// Each `write_str` is one append, so a long `write!` can be cut short
/// part-way when the slot fills up.
impl<T, const C: usize> fmt::Write for MessagePipeline<T, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::fmt::Write;
    use meterkit_hal::TransmitError;
    use std::vec::Vec;

    // Transport that records submissions and completes on demand
    struct FakeTransport {
        idle: bool,
        reject: bool,
        submissions: Vec<Vec<u8>>,
    }

    impl FakeTransport {
        fn new() -> Self {
            Self {
                idle: true,
                reject: false,
                submissions: Vec::new(),
            }
        }

        fn complete(&mut self) {
            self.idle = true;
        }
    }

    impl HostTransport for FakeTransport {
        fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError> {
            if !self.idle {
                return Err(TransmitError::Busy);
            }
            if self.reject {
                return Err(TransmitError::TooLong);
            }
            self.submissions.push(data.to_vec());
            self.idle = false;
            Ok(())
        }

        fn is_idle(&self) -> bool {
            self.idle
        }
    }

    fn pipeline() -> MessagePipeline<FakeTransport, 16> {
        MessagePipeline::new(FakeTransport::new())
    }

    #[test]
    fn test_overflow_leaves_cursor() {
        let mut p = pipeline();
        assert_eq!(p.append(b"HELLO"), Ok(()));
        assert_eq!(p.free_space(), 10);

        assert_eq!(p.append(b"ABCDEFGHIJK"), Err(MessageError::Overflow));
        assert_eq!(p.queued(), 5);
        assert_eq!(p.free_space(), 10);

        // Exactly the remaining space still fits
        assert_eq!(p.append(b"ABCDEFGHIJ"), Ok(()));
        assert_eq!(p.free_space(), 0);
    }

    #[test]
    fn test_flush_while_busy_does_nothing() {
        let mut p = pipeline();
        p.transport_mut().idle = false;
        p.append(b"1234567").unwrap();

        assert_eq!(p.flush(), Err(MessageError::Pending));
        assert_eq!(p.queued(), 7);
        assert_eq!(p.active_slot(), SlotId::A);
        assert!(p.transport().submissions.is_empty());
    }

    #[test]
    fn test_flush_empty_is_up_to_date() {
        let mut p = pipeline();
        assert_eq!(p.flush(), Ok(()));
        assert_eq!(p.active_slot(), SlotId::A);
        assert!(p.transport().submissions.is_empty());
    }

    #[test]
    fn test_flush_submits_and_swaps() {
        let mut p = pipeline();
        p.append(b"ABCDE").unwrap();

        // Transport is now busy with the submission
        assert_eq!(p.flush(), Err(MessageError::Pending));
        assert_eq!(p.transport().submissions, [b"ABCDE".to_vec()]);
        assert_eq!(p.active_slot(), SlotId::B);
        assert_eq!(p.queued(), 0);
        assert_eq!(p.slot_state(SlotId::A), SlotState::Draining);
        assert_eq!(p.slot_state(SlotId::B), SlotState::Idle);
    }

    #[test]
    fn test_draining_slot_released_on_idle_poll() {
        let mut p = pipeline();
        p.append(b"ABCDE").unwrap();
        let _ = p.flush();

        p.transport_mut().complete();
        // Completion is only observed by the next flush
        assert_eq!(p.draining_slot(), Some(SlotId::A));
        assert_eq!(p.flush(), Ok(()));
        assert_eq!(p.draining_slot(), None);
        assert_eq!(p.slot_state(SlotId::A), SlotState::Idle);
    }

    #[test]
    fn test_appends_after_swap_go_to_new_slot() {
        let mut p = pipeline();
        p.append(b"first").unwrap();
        let _ = p.flush();
        p.append(b"second").unwrap();

        assert_eq!(p.slot(SlotId::A).queued(), b"first");
        assert_eq!(p.slot(SlotId::B).queued(), b"second");
        assert_eq!(p.transport().submissions[0], b"first");

        p.transport_mut().complete();
        let _ = p.flush();
        assert_eq!(p.transport().submissions[1], b"second");
        assert_eq!(p.active_slot(), SlotId::A);
        assert_eq!(p.queued(), 0);
    }

    #[test]
    fn test_rejected_transmit_keeps_bytes() {
        let mut p = pipeline();
        p.transport_mut().reject = true;
        p.append(b"keep").unwrap();

        assert_eq!(p.flush(), Err(MessageError::Pending));
        assert_eq!(p.active_slot(), SlotId::A);
        assert_eq!(p.queued(), 4);
        assert_eq!(p.draining_slot(), None);

        p.transport_mut().reject = false;
        let _ = p.flush();
        assert_eq!(p.transport().submissions, [b"keep".to_vec()]);
    }

    #[test]
    fn test_reset() {
        let mut p = pipeline();
        p.append(b"abc").unwrap();
        let _ = p.flush();
        p.append(b"def").unwrap();

        p.reset();
        assert_eq!(p.active_slot(), SlotId::A);
        assert_eq!(p.queued(), 0);
        assert_eq!(p.slot(SlotId::B).len(), 0);
        assert_eq!(p.draining_slot(), None);
    }

    #[test]
    fn test_drain_gives_up_after_budget() {
        let mut p = pipeline();
        p.transport_mut().idle = false;
        p.append(b"stuck").unwrap();

        assert_eq!(p.drain(10), Err(MessageError::Pending));
        assert_eq!(p.queued(), 5);
    }

    #[test]
    fn test_drain_with_idle_transport() {
        let mut p = pipeline();
        p.append(b"x").unwrap();
        // One submission leaves the transport busy, nothing completes it
        assert_eq!(p.drain(3), Err(MessageError::Pending));
        assert_eq!(p.transport().submissions.len(), 1);

        p.transport_mut().complete();
        assert_eq!(p.drain(1), Ok(()));
    }

    #[test]
    fn test_write_macro_appends_raw() {
        let mut p = pipeline();
        write!(p, "v={}", 42).unwrap();
        assert_eq!(p.slot(SlotId::A).queued(), b"v=42");

        assert!(write!(p, "{}", "far too long for this").is_err());
        assert_eq!(p.queued(), 4);
    }
}
