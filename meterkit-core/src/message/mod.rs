//! Diagnostic message pipeline
//!
//! Producers (often interrupt handlers) format short text messages into
//! the *active* slot of a two-slot buffer. A periodic [`flush`] hands the
//! filled slot to the host UART and makes the other slot active, so the
//! transport drains one slot while producers fill the other.
//!
//! ```text
//!  message!()  ──► Formatter ──► append ──► ┌────────┐
//!                  (scratch)                │ slot A │ active
//!                                           └────────┘
//!                                  flush ──►┌────────┐
//!                                           │ slot B │ draining ──► HostTransport
//!                                           └────────┘
//! ```
//!
//! Nothing here blocks. When producers outrun the transport, appends fail
//! with [`MessageError::Overflow`] and the message is dropped.
//!
//! [`flush`]: MessagePipeline::flush

mod formatter;
mod macros;
mod messages;
mod pipeline;
mod shared;
mod slot;

use core::fmt;

pub use formatter::{Formatter, MessageKind, ERROR_LABEL, LINE_END, WARNING_LABEL};
#[cfg(feature = "debug-messages")]
pub use formatter::DEBUG_LABEL;
pub use messages::Messages;
pub use pipeline::MessagePipeline;
pub use shared::SharedMessages;
pub use slot::{Slot, SlotId, SlotState};

/// Errors from the message pipeline
///
/// Both are advisory. Nothing is retried and nothing is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// The active slot lacked room; the bytes were dropped
    Overflow,
    /// Bytes are still queued or the transport is still busy
    Pending,
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::Overflow => f.write_str("message buffer full"),
            MessageError::Pending => f.write_str("messages pending"),
        }
    }
}
