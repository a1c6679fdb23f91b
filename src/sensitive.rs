//! Sensitive-memory registry (C7).
//!
//! Transient secret material (the padded plaintext, per-byte polynomial
//! coefficients, and reconstruction point lists) is adopted into a
//! [`Registry`] for the lifetime of a split or combine call. The registry
//! zeroizes every tracked buffer on an explicit [`Registry::clear`] call and
//! again on drop, so a buffer is wiped whether the call returns normally,
//! returns an error, or unwinds through a panic.
//!
//! This replaces the source's name-based heuristic (scanning object fields
//! for "secret" in their name) with explicit ownership: callers opt a
//! buffer in by handing it to the registry, nothing is found by reflection.

use zeroize::Zeroize;

/// Tracks transient byte buffers and zeroizes all of them on clear or drop.
pub(crate) struct Registry {
    buffers: Vec<Vec<u8>>,
}

impl Registry {
    /// Start an empty registry.
    pub(crate) fn new() -> Self {
        Registry {
            buffers: Vec::new(),
        }
    }

    /// Adopt a buffer into the registry, returning a handle to retrieve it
    /// by index while it is still tracked.
    pub(crate) fn adopt(&mut self, buf: Vec<u8>) -> usize {
        self.buffers.push(buf);
        self.buffers.len() - 1
    }

    /// Borrow a tracked buffer by handle.
    pub(crate) fn get(&self, handle: usize) -> &[u8] {
        &self.buffers[handle]
    }

    /// Mutably borrow a tracked buffer by handle.
    pub(crate) fn get_mut(&mut self, handle: usize) -> &mut Vec<u8> {
        &mut self.buffers[handle]
    }

    /// Zero every tracked buffer and forget them. Safe to call more than
    /// once; a second call is a no-op.
    pub(crate) fn clear(&mut self) {
        for buf in self.buffers.iter_mut() {
            buf.zeroize();
        }
        self.buffers.clear();
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        self.clear();
    }
}
