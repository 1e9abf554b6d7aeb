/// Contract violations reported by [`DigestEngine`](crate::DigestEngine) calls.
///
/// Hashing itself never fails; every variant here is a caller-side
/// programming error that is reported before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required collaborator was absent at construction.
    #[error("wrapped digest is missing")]
    InvalidArgument,
    /// `offset..offset + len` does not lie inside the input buffer.
    #[error("input range {offset}+{len} out of bounds for buffer of {available} bytes")]
    InvalidRange {
        /// Start of the rejected range.
        offset: usize,
        /// Length of the rejected range.
        len: usize,
        /// Length of the input buffer.
        available: usize,
    },
    /// The output buffer cannot hold the digest at the requested offset.
    #[error("output buffer of {available} bytes cannot hold {required} bytes at offset {offset}")]
    InsufficientOutputSpace {
        /// Requested write position.
        offset: usize,
        /// Bytes the digest needs to write.
        required: usize,
        /// Length of the output buffer.
        available: usize,
    },
}
