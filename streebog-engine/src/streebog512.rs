use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::U64,
    HashMarker, Output,
};

use crate::consts::IV_512;
use crate::streebog::StreebogState;

/// Core Streebog512 hasher state.
#[derive(Clone)]
pub struct Streebog512Core {
    state: StreebogState,
}

impl Streebog512Core {
    pub(crate) const NAME: &'static str = "Streebog512";
}

impl Default for Streebog512Core {
    #[inline]
    fn default() -> Self {
        Self {
            state: StreebogState::new(IV_512),
        }
    }
}

impl Reset for Streebog512Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Streebog512Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

opaque_debug::implement!(Streebog512Core);

impl HashMarker for Streebog512Core {}

impl BlockSizeUser for Streebog512Core {
    type BlockSize = U64;
}

impl BufferKindUser for Streebog512Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Streebog512Core {
    type OutputSize = U64;
}

impl UpdateCore for Streebog512Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.state.update_blocks(blocks);
    }
}

impl FixedOutputCore for Streebog512Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        self.state.finalize(buffer);
        out.copy_from_slice(self.state.h())
    }
}

/// Streebog512 hasher state.
pub type Streebog512 = CoreWrapper<Streebog512Core>;

crate::engine::impl_snapshot_engine!(Streebog512, Streebog512Core);
