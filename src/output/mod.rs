//! Where finished bytes go. Stdout is the usual destination, but anything that can
//! take bytes through a shared reference can receive lines.

mod capture;
mod terminal;

pub use capture::Capture;

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// `&self` writes plus `Send + Sync` let one destination be shared by every line
/// formatter a logger hands out, across threads.
///
/// Each `write_all` call should reach the underlying sink without being split by
/// writes from other threads; buffered lines rely on that to stay whole.
pub trait Destination: Send + Sync {
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write_all(&self, bytes: &[u8]) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    /// Probed when a logger is built without an explicit colorize flag.
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<W: Write + Send> Destination for Mutex<W> {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }
}

impl<T: Destination + ?Sized> Destination for Arc<T> {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

impl<T: Destination + ?Sized> Destination for &T {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}
