//! `message*!` macros
//!
//! Every macro takes the output first, then `format!`-style arguments:
//!
//! ```ignore
//! message!(MESSAGES, "sample rate {} Hz", rate)?;
//! message_warn!(MESSAGES, "front end not ready");
//! ```
//!
//! The output is anything with a `print(MessageKind, fmt::Arguments)`
//! method: [`Messages`](crate::message::Messages) or
//! [`SharedMessages`](crate::message::SharedMessages). Each macro returns
//! `Result<(), MessageError>`.

/// Print a line-terminated message
#[macro_export]
macro_rules! message {
    ($out:expr, $($arg:tt)*) => {
        $out.print($crate::message::MessageKind::Plain, format_args!($($arg)*))
    };
}

/// Print text without a line terminator
#[macro_export]
macro_rules! message_raw {
    ($out:expr, $($arg:tt)*) => {
        $out.print($crate::message::MessageKind::Raw, format_args!($($arg)*))
    };
}

/// Print a warning
#[macro_export]
macro_rules! message_warn {
    ($out:expr, $($arg:tt)*) => {
        $out.print($crate::message::MessageKind::Warning, format_args!($($arg)*))
    };
}

/// Print an error
#[macro_export]
macro_rules! message_error {
    ($out:expr, $($arg:tt)*) => {
        $out.print($crate::message::MessageKind::Error, format_args!($($arg)*))
    };
}

/// Print a debug message
///
/// Without the `debug-messages` feature this expands to `Ok(())` and the
/// arguments are never evaluated.
#[cfg(feature = "debug-messages")]
#[macro_export]
macro_rules! message_debug {
    ($out:expr, $($arg:tt)*) => {
        $out.print($crate::message::MessageKind::Debug, format_args!($($arg)*))
    };
}

#[cfg(not(feature = "debug-messages"))]
#[macro_export]
macro_rules! message_debug {
    ($out:expr, $($arg:tt)*) => {
        ::core::result::Result::<(), $crate::message::MessageError>::Ok(())
    };
}

/// Print debug text without a line terminator
///
/// Compiled out like [`message_debug!`].
#[cfg(feature = "debug-messages")]
#[macro_export]
macro_rules! message_debug_raw {
    ($out:expr, $($arg:tt)*) => {
        $out.print($crate::message::MessageKind::DebugRaw, format_args!($($arg)*))
    };
}

#[cfg(not(feature = "debug-messages"))]
#[macro_export]
macro_rules! message_debug_raw {
    ($out:expr, $($arg:tt)*) => {
        ::core::result::Result::<(), $crate::message::MessageError>::Ok(())
    };
}
