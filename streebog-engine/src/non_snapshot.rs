use crate::{DigestEngine, Error};

/// Forwards every [`DigestEngine`] call to an inner engine without exposing
/// the inner engine's [`SnapshotDigest`](crate::SnapshotDigest) capability.
///
/// The wrapper deliberately implements neither `SnapshotDigest` nor
/// `Clone`, so whoever holds it can hash but cannot duplicate state.
///
/// ```rust
/// use streebog_engine::{DigestEngine, NonSnapshotDigest, Streebog256};
///
/// let mut digest = NonSnapshotDigest::new(Streebog256::default());
/// digest.update_slice(b"abc");
/// let mut out = [0u8; 32];
/// assert_eq!(digest.finalize_at(&mut out, 0), Ok(32));
/// ```
#[derive(Debug)]
pub struct NonSnapshotDigest<D> {
    inner: D,
}

impl<D: DigestEngine> NonSnapshotDigest<D> {
    /// Wrap `inner`.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Wrap `inner`, failing with [`Error::InvalidArgument`] if it is absent.
    pub fn try_new(inner: Option<D>) -> Result<Self, Error> {
        match inner {
            Some(inner) => Ok(Self::new(inner)),
            None => {
                log::debug!("refusing to wrap an absent digest");
                Err(Error::InvalidArgument)
            }
        }
    }

    /// Unwrap the inner engine.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: DigestEngine> DigestEngine for NonSnapshotDigest<D> {
    fn algorithm_name(&self) -> &'static str {
        self.inner.algorithm_name()
    }

    fn output_size(&self) -> usize {
        self.inner.output_size()
    }

    fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    fn update_byte(&mut self, byte: u8) {
        self.inner.update_byte(byte)
    }

    fn update_slice(&mut self, input: &[u8]) {
        self.inner.update_slice(input)
    }

    fn update_bulk(&mut self, input: &[u8], offset: usize, len: usize) -> Result<(), Error> {
        self.inner.update_bulk(input, offset, len)
    }

    fn finalize_at(&mut self, out: &mut [u8], offset: usize) -> Result<usize, Error> {
        self.inner.finalize_at(out, offset)
    }

    fn reset_engine(&mut self) {
        self.inner.reset_engine()
    }
}
