//! Formatter and pipeline bundled for the application

use core::fmt;

use meterkit_hal::HostTransport;

use super::formatter::{Formatter, MessageKind};
use super::pipeline::MessagePipeline;
use super::MessageError;
use crate::config::{MAX_MSG_SIZE, MAX_MSG_STORAGE_SIZE};

/// Application-facing message output
///
/// Owns the pipeline (two slots of `C` bytes) and the formatter (one
/// scratch buffer of `M` bytes). The `message*!` macros print through
/// [`Messages::print`].
pub struct Messages<T, const C: usize = MAX_MSG_STORAGE_SIZE, const M: usize = MAX_MSG_SIZE> {
    pipeline: MessagePipeline<T, C>,
    formatter: Formatter<M>,
}

impl<T, const C: usize, const M: usize> Messages<T, C, M> {
    pub const fn new(transport: T) -> Self {
        Self {
            pipeline: MessagePipeline::new(transport),
            formatter: Formatter::new(),
        }
    }

    /// Format and queue one message
    pub fn print(&mut self, kind: MessageKind, args: fmt::Arguments<'_>) -> Result<(), MessageError> {
        self.formatter.print(&mut self.pipeline, kind, args)
    }

    /// Queue bytes as they are
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), MessageError> {
        self.pipeline.append(bytes)
    }

    /// Bytes that still fit before messages start being dropped
    pub fn free_space(&self) -> usize {
        self.pipeline.free_space()
    }

    pub fn reset(&mut self) {
        self.pipeline.reset();
    }

    pub fn pipeline(&self) -> &MessagePipeline<T, C> {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut MessagePipeline<T, C> {
        &mut self.pipeline
    }
}

impl<T: HostTransport, const C: usize, const M: usize> Messages<T, C, M> {
    /// See [`MessagePipeline::flush`]
    pub fn flush(&mut self) -> Result<(), MessageError> {
        self.pipeline.flush()
    }

    /// See [`MessagePipeline::drain`]
    pub fn drain(&mut self, max_polls: u32) -> Result<(), MessageError> {
        self.pipeline.drain(max_polls)
    }

    pub fn status(&self) -> Result<(), MessageError> {
        self.pipeline.status()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::message::SlotId;
    use meterkit_hal::TransmitError;
    use std::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        busy: bool,
        sent: Vec<u8>,
    }

    impl HostTransport for Recorder {
        fn transmit(&mut self, data: &[u8]) -> Result<(), TransmitError> {
            self.sent.extend_from_slice(data);
            self.busy = true;
            Ok(())
        }

        fn is_idle(&self) -> bool {
            !self.busy
        }
    }

    #[test]
    fn test_macros_route_by_kind() {
        let mut out: Messages<Recorder, 128, 64> = Messages::new(Recorder::default());

        crate::message!(out, "boot {}", 1).unwrap();
        crate::message_raw!(out, "> ").unwrap();
        crate::message_warn!(out, "vbat {}mV", 3100).unwrap();
        crate::message_error!(out, "spi").unwrap();

        assert_eq!(
            out.pipeline().slot(SlotId::A).queued(),
            b"boot 1\n\r> Warn : vbat 3100mV\n\rError : spi\n\r"
        );
    }

    #[test]
    fn test_print_then_flush() {
        let mut out: Messages<Recorder, 64, 32> = Messages::new(Recorder::default());
        crate::message!(out, "a").unwrap();
        crate::message!(out, "b").unwrap();

        assert_eq!(out.flush(), Err(MessageError::Pending));
        assert_eq!(out.pipeline().transport().sent, b"a\n\rb\n\r");
        assert_eq!(out.free_space(), 63);
    }

    #[cfg(not(feature = "debug-messages"))]
    #[test]
    fn test_debug_compiled_out() {
        let out: Messages<Recorder, 64, 32> = Messages::new(Recorder::default());
        assert_eq!(crate::message_debug!(out, "hidden {}", 1), Ok(()));
        assert_eq!(crate::message_debug_raw!(out, "hidden"), Ok(()));
        assert_eq!(out.pipeline().queued(), 0);
    }

    #[cfg(feature = "debug-messages")]
    #[test]
    fn test_debug_enabled() {
        let mut out: Messages<Recorder, 64, 32> = Messages::new(Recorder::default());
        crate::message_debug!(out, "x={}", 1).unwrap();
        crate::message_debug_raw!(out, "!").unwrap();
        assert_eq!(out.pipeline().slot(SlotId::A).queued(), b"Debug : x=1\n\r!");
    }
}
