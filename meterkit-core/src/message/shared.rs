//! Interrupt-safe shared message output

use core::cell::RefCell;
use core::fmt;
use core::future::Future;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use meterkit_hal::HostTransport;

use super::formatter::MessageKind;
use super::messages::Messages;
use super::MessageError;
use crate::config::{MAX_MSG_SIZE, MAX_MSG_STORAGE_SIZE};

/// [`Messages`] behind a critical-section mutex
///
/// Lives in a `static` and is shared by interrupt handlers (producers) and
/// the flush ticker. Every operation runs inside a critical section, so a
/// flush can never swap slots while an append is half copied.
pub struct SharedMessages<T, const C: usize = MAX_MSG_STORAGE_SIZE, const M: usize = MAX_MSG_SIZE> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Messages<T, C, M>>>,
}

impl<T, const C: usize, const M: usize> SharedMessages<T, C, M> {
    pub const fn new(transport: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Messages::new(transport))),
        }
    }

    /// Run `f` with exclusive access to the messages
    pub fn with<R>(&self, f: impl FnOnce(&mut Messages<T, C, M>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn print(&self, kind: MessageKind, args: fmt::Arguments<'_>) -> Result<(), MessageError> {
        self.with(|messages| messages.print(kind, args))
    }

    pub fn append(&self, bytes: &[u8]) -> Result<(), MessageError> {
        self.with(|messages| messages.append(bytes))
    }

    pub fn free_space(&self) -> usize {
        self.with(|messages| messages.free_space())
    }

    pub fn reset(&self) {
        self.with(|messages| messages.reset());
    }
}

impl<T: HostTransport, const C: usize, const M: usize> SharedMessages<T, C, M> {
    pub fn flush(&self) -> Result<(), MessageError> {
        self.with(|messages| messages.flush())
    }

    /// Flush until everything is out or `max_polls` flushes were spent
    ///
    /// Each poll takes the critical section separately so the transport's
    /// completion interrupt can run in between.
    pub fn drain(&self, max_polls: u32) -> Result<(), MessageError> {
        for _ in 0..max_polls {
            if self.flush().is_ok() {
                return Ok(());
            }
        }
        self.with(|messages| messages.status())
    }

    /// Like [`drain`](Self::drain), awaiting `pause()` between polls
    ///
    /// For transports completed by another task rather than by an
    /// interrupt, which a busy-waiting drain would starve.
    pub async fn drain_paced<F, Fut>(&self, max_polls: u32, mut pause: F) -> Result<(), MessageError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        for _ in 0..max_polls {
            if self.flush().is_ok() {
                return Ok(());
            }
            pause().await;
        }
        self.with(|messages| messages.status())
    }
}
