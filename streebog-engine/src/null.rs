use alloc::vec::Vec;

use crate::engine::output_window;
use crate::{DigestEngine, Error};

/// Identity "digest": finalization returns the absorbed bytes verbatim.
///
/// Useful wherever a [`DigestEngine`] is required but no hashing is wanted,
/// e.g. signing paths that operate on pre-hashed input.
#[derive(Clone, Default, Debug)]
pub struct NullDigest {
    buf: Vec<u8>,
}

impl NullDigest {
    const NAME: &'static str = "NULL";

    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DigestEngine for NullDigest {
    fn algorithm_name(&self) -> &'static str {
        Self::NAME
    }

    /// Number of bytes absorbed since the last reset or finalization.
    fn output_size(&self) -> usize {
        self.buf.len()
    }

    fn block_size(&self) -> usize {
        0
    }

    fn update_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    fn update_slice(&mut self, input: &[u8]) {
        self.buf.extend_from_slice(input);
    }

    fn finalize_at(&mut self, out: &mut [u8], offset: usize) -> Result<usize, Error> {
        let len = self.buf.len();
        output_window(Self::NAME, out, offset, len)?.copy_from_slice(&self.buf);
        self.buf.clear();
        log::trace!("{}: finalized {} bytes", Self::NAME, len);
        Ok(len)
    }

    fn reset_engine(&mut self) {
        self.buf.clear();
        log::trace!("{}: reset", Self::NAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_finalize_keeps_accumulated_bytes() {
        let mut d = NullDigest::new();
        d.update_slice(b"hello");
        let mut short = [0u8; 4];
        assert_eq!(
            d.finalize_at(&mut short, 0),
            Err(Error::InsufficientOutputSpace {
                offset: 0,
                required: 5,
                available: 4,
            })
        );
        assert_eq!(d.output_size(), 5);

        let mut out = [0u8; 5];
        assert_eq!(d.finalize_at(&mut out, 0), Ok(5));
        assert_eq!(&out, b"hello");
    }

    #[test]
    fn empty_finalize_writes_nothing() {
        let mut d = NullDigest::new();
        let mut out = [0xaau8; 2];
        assert_eq!(d.finalize_at(&mut out, 2), Ok(0));
        assert_eq!(out, [0xaa, 0xaa]);
    }
}
