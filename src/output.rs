//! Output sinks for usage and help text

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// Where rendered help and usage text is written
#[derive(Default)]
pub enum Output {
    /// The process's standard error stream
    #[default]
    Stderr,
    /// The process's standard output stream
    Stdout,
    /// Any other writer
    Writer(Box<dyn Write>),
}

impl Output {
    /// Wrap an arbitrary writer
    pub fn writer(w: impl Write + 'static) -> Self {
        Output::Writer(Box::new(w))
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stderr => io::stderr().write(buf),
            Output::Stdout => io::stdout().write(buf),
            Output::Writer(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stderr => io::stderr().flush(),
            Output::Stdout => io::stdout().flush(),
            Output::Writer(w) => w.flush(),
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stderr => f.write_str("Stderr"),
            Output::Stdout => f.write_str("Stdout"),
            Output::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// In-memory writer whose clones share one buffer.
///
/// Hand one clone to the commander and keep the other to read what was
/// rendered.
#[derive(Clone, Default, Debug)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_buffer_clones_see_writes() {
        let buf = SharedBuffer::new();
        let mut out = Output::writer(buf.clone());
        write!(out, "hello {}", 42).unwrap();

        assert_eq!(buf.contents(), "hello 42");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_default_is_stderr() {
        assert!(matches!(Output::default(), Output::Stderr));
    }
}
