use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{U32, U64},
    HashMarker, Output,
};

use crate::consts::IV_256;
use crate::streebog::StreebogState;

/// Core Streebog256 hasher state.
#[derive(Clone)]
pub struct Streebog256Core {
    state: StreebogState,
}

impl Streebog256Core {
    pub(crate) const NAME: &'static str = "Streebog256";
}

impl Default for Streebog256Core {
    #[inline]
    fn default() -> Self {
        Self {
            state: StreebogState::new(IV_256),
        }
    }
}

impl Reset for Streebog256Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Streebog256Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

opaque_debug::implement!(Streebog256Core);

impl HashMarker for Streebog256Core {}

impl BlockSizeUser for Streebog256Core {
    type BlockSize = U64;
}

impl BufferKindUser for Streebog256Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Streebog256Core {
    type OutputSize = U32;
}

impl UpdateCore for Streebog256Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.state.update_blocks(blocks);
    }
}

impl FixedOutputCore for Streebog256Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        // full 512-bit finalization first, then keep the high half
        self.state.finalize(buffer);
        out.copy_from_slice(&self.state.h()[32..])
    }
}

/// Streebog256 hasher state.
pub type Streebog256 = CoreWrapper<Streebog256Core>;

crate::engine::impl_snapshot_engine!(Streebog256, Streebog256Core);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::IV_512;
    use digest::{block_buffer::BlockBuffer, Digest};

    fn full_width(iv: [u8; 64], input: &[u8]) -> [u8; 64] {
        let mut state = StreebogState::new(iv);
        let mut buffer = BlockBuffer::<U64, Eager>::default();
        buffer.digest_blocks(input, |blocks| state.update_blocks(blocks));
        state.finalize(&mut buffer);
        *state.h()
    }

    #[test]
    fn output_is_high_half_of_full_computation() {
        let inputs: [&[u8]; 4] = [b"", b"a", &[0x5a; 64], &[0x11; 150]];
        for input in inputs {
            let short = Streebog256::digest(input);
            assert_eq!(short[..], full_width(IV_256, input)[32..]);
            // the IV, not the truncation, distinguishes the variants
            assert_ne!(short[..], full_width(IV_512, input)[32..]);
        }
    }
}
