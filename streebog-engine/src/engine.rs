use crate::Error;

/// Uniform incremental-digest contract shared by the Streebog hashers and
/// the decorators in this crate.
///
/// The trait is object safe, so collaborators can hold a
/// `&mut dyn DigestEngine` without knowing which engine sits behind it.
pub trait DigestEngine {
    /// Stable algorithm identifier.
    fn algorithm_name(&self) -> &'static str;

    /// Number of bytes the next [`finalize_at`](Self::finalize_at) writes.
    fn output_size(&self) -> usize;

    /// Internal absorption block size in bytes, as needed by HMAC-style
    /// constructions.
    fn block_size(&self) -> usize;

    /// Absorb a single byte.
    fn update_byte(&mut self, byte: u8);

    /// Absorb a whole slice.
    fn update_slice(&mut self, input: &[u8]);

    /// Absorb `input[offset..offset + len]`.
    ///
    /// Nothing is absorbed when the range falls outside `input`.
    fn update_bulk(&mut self, input: &[u8], offset: usize, len: usize) -> Result<(), Error> {
        let end = match offset.checked_add(len) {
            Some(end) if end <= input.len() => end,
            _ => {
                log::debug!(
                    "{}: rejected input range {}+{} of {} bytes",
                    self.algorithm_name(),
                    offset,
                    len,
                    input.len()
                );
                return Err(Error::InvalidRange {
                    offset,
                    len,
                    available: input.len(),
                });
            }
        };
        self.update_slice(&input[offset..end]);
        Ok(())
    }

    /// Write the digest to `out[offset..]` and reset to the initial state.
    ///
    /// Returns the number of bytes written. On error the accumulated state
    /// is left as it was.
    fn finalize_at(&mut self, out: &mut [u8], offset: usize) -> Result<usize, Error>;

    /// Discard everything absorbed so far.
    fn reset_engine(&mut self);
}

/// A [`DigestEngine`] whose accumulated state can be duplicated.
pub trait SnapshotDigest: DigestEngine + Sized {
    /// Independent copy of the current state.
    fn snapshot(&self) -> Self;

    /// Overwrite this engine's state with a copy of `other`'s.
    fn restore(&mut self, other: &Self);
}

/// Borrow `out[offset..offset + required]`, or report why it does not exist.
pub(crate) fn output_window<'a>(
    name: &str,
    out: &'a mut [u8],
    offset: usize,
    required: usize,
) -> Result<&'a mut [u8], Error> {
    let available = out.len();
    match offset.checked_add(required) {
        Some(end) if end <= available => Ok(&mut out[offset..end]),
        _ => {
            log::debug!(
                "{}: output buffer of {} bytes cannot hold {} bytes at offset {}",
                name,
                available,
                required,
                offset
            );
            Err(Error::InsufficientOutputSpace {
                offset,
                required,
                available,
            })
        }
    }
}

impl<D: DigestEngine + ?Sized> DigestEngine for &mut D {
    fn algorithm_name(&self) -> &'static str {
        (**self).algorithm_name()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn update_byte(&mut self, byte: u8) {
        (**self).update_byte(byte)
    }

    fn update_slice(&mut self, input: &[u8]) {
        (**self).update_slice(input)
    }

    fn update_bulk(&mut self, input: &[u8], offset: usize, len: usize) -> Result<(), Error> {
        (**self).update_bulk(input, offset, len)
    }

    fn finalize_at(&mut self, out: &mut [u8], offset: usize) -> Result<usize, Error> {
        (**self).finalize_at(out, offset)
    }

    fn reset_engine(&mut self) {
        (**self).reset_engine()
    }
}

#[cfg(feature = "alloc")]
impl<D: DigestEngine + ?Sized> DigestEngine for alloc::boxed::Box<D> {
    fn algorithm_name(&self) -> &'static str {
        (**self).algorithm_name()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn update_byte(&mut self, byte: u8) {
        (**self).update_byte(byte)
    }

    fn update_slice(&mut self, input: &[u8]) {
        (**self).update_slice(input)
    }

    fn update_bulk(&mut self, input: &[u8], offset: usize, len: usize) -> Result<(), Error> {
        (**self).update_bulk(input, offset, len)
    }

    fn finalize_at(&mut self, out: &mut [u8], offset: usize) -> Result<usize, Error> {
        (**self).finalize_at(out, offset)
    }

    fn reset_engine(&mut self) {
        (**self).reset_engine()
    }
}

/// Implements [`DigestEngine`] and [`SnapshotDigest`] for a
/// `CoreWrapper` hasher on top of the `digest` traits.
macro_rules! impl_snapshot_engine {
    ($hasher:ident, $core:ident) => {
        impl $crate::DigestEngine for $hasher {
            fn algorithm_name(&self) -> &'static str {
                $core::NAME
            }

            fn output_size(&self) -> usize {
                <<$core as $crate::digest::core_api::OutputSizeUser>::OutputSize
                    as $crate::digest::typenum::Unsigned>::USIZE
            }

            fn block_size(&self) -> usize {
                <<$core as $crate::digest::core_api::BlockSizeUser>::BlockSize
                    as $crate::digest::typenum::Unsigned>::USIZE
            }

            #[inline]
            fn update_byte(&mut self, byte: u8) {
                $crate::digest::Update::update(self, &[byte]);
            }

            #[inline]
            fn update_slice(&mut self, input: &[u8]) {
                $crate::digest::Update::update(self, input);
            }

            fn finalize_at(
                &mut self,
                out: &mut [u8],
                offset: usize,
            ) -> Result<usize, $crate::Error> {
                let size = self.output_size();
                let window = $crate::engine::output_window($core::NAME, out, offset, size)?;
                $crate::digest::FixedOutputReset::finalize_into_reset(
                    self,
                    $crate::digest::Output::<Self>::from_mut_slice(window),
                );
                log::trace!("{}: finalized {} bytes", $core::NAME, size);
                Ok(size)
            }

            fn reset_engine(&mut self) {
                $crate::digest::Reset::reset(self);
                log::trace!("{}: reset", $core::NAME);
            }
        }

        impl $crate::SnapshotDigest for $hasher {
            #[inline]
            fn snapshot(&self) -> Self {
                self.clone()
            }

            #[inline]
            fn restore(&mut self, other: &Self) {
                self.clone_from(other);
            }
        }
    };
}

pub(crate) use impl_snapshot_engine;
