//! Bounded message formatting

use core::fmt::{self, Write};

use heapless::Vec;

use super::pipeline::MessagePipeline;
use super::MessageError;

/// Label queued in front of warnings
pub const WARNING_LABEL: &str = "Warn : ";

/// Label queued in front of errors
pub const ERROR_LABEL: &str = "Error : ";

/// Label queued in front of debug messages
#[cfg(feature = "debug-messages")]
pub const DEBUG_LABEL: &str = "Debug : ";

/// Line terminator expected by the host terminal
pub const LINE_END: &str = "\n\r";

/// What kind of message is being printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKind {
    /// Line-terminated text
    Plain,
    /// Text exactly as formatted
    Raw,
    /// Line-terminated text behind [`WARNING_LABEL`]
    Warning,
    /// Line-terminated text behind [`ERROR_LABEL`]
    Error,
    /// Line-terminated text behind `DEBUG_LABEL`
    #[cfg(feature = "debug-messages")]
    Debug,
    /// Debug text exactly as formatted
    #[cfg(feature = "debug-messages")]
    DebugRaw,
}

impl MessageKind {
    /// Label queued as a separate record before the text
    pub const fn label(self) -> Option<&'static str> {
        match self {
            MessageKind::Warning => Some(WARNING_LABEL),
            MessageKind::Error => Some(ERROR_LABEL),
            #[cfg(feature = "debug-messages")]
            MessageKind::Debug => Some(DEBUG_LABEL),
            MessageKind::Plain | MessageKind::Raw => None,
            #[cfg(feature = "debug-messages")]
            MessageKind::DebugRaw => None,
        }
    }

    /// Whether [`LINE_END`] follows the text
    pub const fn is_terminated(self) -> bool {
        match self {
            MessageKind::Raw => false,
            #[cfg(feature = "debug-messages")]
            MessageKind::DebugRaw => false,
            MessageKind::Plain | MessageKind::Warning | MessageKind::Error => true,
            #[cfg(feature = "debug-messages")]
            MessageKind::Debug => true,
        }
    }
}

/// Renders messages into a scratch buffer of `M` bytes
///
/// At most `M - 1` bytes of a message are kept; anything longer is cut
/// off, terminator included. The scratch buffer is reused for every call,
/// so one formatter serves one producer context at a time.
pub struct Formatter<const M: usize> {
    scratch: Vec<u8, M>,
}

impl<const M: usize> Default for Formatter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: usize> Formatter<M> {
    pub const fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }

    /// Render `args` for `kind` and return the bytes
    ///
    /// The label is not part of the rendered text.
    pub fn render(&mut self, kind: MessageKind, args: fmt::Arguments<'_>) -> &[u8] {
        self.scratch.clear();
        let mut out = Truncating(&mut self.scratch);
        // Err only means the output was cut short
        let _ = out.write_fmt(args);
        if kind.is_terminated() {
            let _ = out.write_str(LINE_END);
        }
        &self.scratch
    }

    /// Render a message and queue it in `pipeline`
    ///
    /// Labeled kinds queue the label and the text as two appends. The text
    /// is attempted even if the label did not fit, and its outcome is the
    /// result: [`MessageError::Overflow`] means the text was dropped.
    pub fn print<T, const C: usize>(
        &mut self,
        pipeline: &mut MessagePipeline<T, C>,
        kind: MessageKind,
        args: fmt::Arguments<'_>,
    ) -> Result<(), MessageError> {
        if let Some(label) = kind.label() {
            let _ = pipeline.append(label.as_bytes());
        }
        let text = self.render(kind, args);
        pipeline.append(text)
    }
}

/// `fmt::Write` sink that keeps what fits and drops the rest
struct Truncating<'a, const M: usize>(&'a mut Vec<u8, M>);

impl<const M: usize> Write for Truncating<'_, M> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = M.saturating_sub(1).saturating_sub(self.0.len());
        let take = s.len().min(room);
        // Cannot fail: take never exceeds the remaining capacity
        let _ = self.0.extend_from_slice(&s.as_bytes()[..take]);
        if take < s.len() {
            return Err(fmt::Error);
        }
        Ok(())
    }
}
