//! Console destinations. Both standard streams lock internally per `write_all`.

use super::Destination;
use std::io::{self, IsTerminal, Stderr, Stdout, Write};

impl Destination for Stdout {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.lock().write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Destination for Stderr {
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.lock().write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}
