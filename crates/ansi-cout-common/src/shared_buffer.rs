//! A cloneable in-memory sink.
//!
//! Every clone appends to the same byte vector, so several writers (or
//! threads) can capture into one stream and the result can be inspected
//! afterwards without touching real standard output.

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use crate::sync::mutex_lock_or_recover;

#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        mutex_lock_or_recover(&self.bytes).clone()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&mutex_lock_or_recover(&self.bytes)).into_owned()
    }

    /// Drains the buffer, returning what it held.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *mutex_lock_or_recover(&self.bytes))
    }

    pub fn len(&self) -> usize {
        mutex_lock_or_recover(&self.bytes).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        mutex_lock_or_recover(&self.bytes).extend_from_slice(buf);
        Ok(buf.len())
    }

    // A single lock for the whole slice keeps one caller's bytes contiguous.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        mutex_lock_or_recover(&self.bytes).extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
