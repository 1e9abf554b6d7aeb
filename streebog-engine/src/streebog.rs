use digest::block_buffer::{BlockBuffer, Eager};
use digest::consts::U64;
use digest::generic_array::GenericArray;

use crate::consts::{BLOCK_SIZE, C};
use crate::table::SHUFFLED_LIN_TABLE;

type Block = [u8; BLOCK_SIZE];

const ZERO: Block = [0u8; BLOCK_SIZE];

/// Chaining value plus the 512-bit length counter `N` and checksum `Σ`.
///
/// Both counters are little-endian `u64` limbs and wrap modulo 2^512.
#[derive(Copy, Clone)]
pub(crate) struct StreebogState {
    h: Block,
    n: [u64; 8],
    sigma: [u64; 8],
}

#[inline(always)]
fn lps(h: &mut Block, n: &Block) {
    for i in 0..64 {
        h[i] ^= n[i];
    }

    let mut buf = [0u64; 8];

    for i in 0..4 {
        for j in 0..8 {
            let b = h[2 * i + 8 * j] as usize;
            buf[2 * i] ^= SHUFFLED_LIN_TABLE[j][b];
            let b = h[2 * i + 1 + 8 * j] as usize;
            buf[2 * i + 1] ^= SHUFFLED_LIN_TABLE[j][b];
        }
    }

    for (chunk, v) in h.chunks_exact_mut(8).zip(buf.iter()) {
        chunk.copy_from_slice(&v.to_le_bytes());
    }
}

impl StreebogState {
    pub(crate) const fn new(iv: Block) -> Self {
        Self {
            h: iv,
            n: [0; 8],
            sigma: [0; 8],
        }
    }

    /// Current chaining value; after `finalize` this is the raw 512-bit digest.
    pub(crate) fn h(&self) -> &Block {
        &self.h
    }

    fn g(&mut self, n: &Block, m: &Block) {
        let mut key = self.h;
        let mut block = *m;

        lps(&mut key, n);

        #[allow(clippy::needless_range_loop)]
        for i in 0..12 {
            lps(&mut block, &key);
            lps(&mut key, &C[i]);
        }

        for i in 0..64 {
            self.h[i] ^= block[i] ^ key[i] ^ m[i];
        }
    }

    fn update_sigma(&mut self, m: &Block) {
        add_assign_512(&mut self.sigma, &to_words(m));
    }

    fn update_n(&mut self, len: usize) {
        // `len` never exceeds the block size, so `8 * len` fits the low limb
        let mut bits = [0u64; 8];
        bits[0] = 8 * len as u64;
        add_assign_512(&mut self.n, &bits);
    }

    fn compress(&mut self, block: &Block, msg_len: usize) {
        self.g(&to_bytes(&self.n), block);
        self.update_n(msg_len);
        self.update_sigma(block);
    }

    pub(crate) fn update_blocks(&mut self, blocks: &[GenericArray<u8, U64>]) {
        for block in blocks {
            let mut m = ZERO;
            m.copy_from_slice(block);
            self.compress(&m, BLOCK_SIZE);
        }
    }

    pub(crate) fn finalize(&mut self, buffer: &mut BlockBuffer<U64, Eager>) {
        let pos = buffer.get_pos();
        let padded = buffer.pad_with_zeros();
        padded[pos] = 1;
        let mut m = ZERO;
        m.copy_from_slice(&padded[..]);
        self.compress(&m, pos);

        let n = to_bytes(&self.n);
        self.g(&ZERO, &n);
        let sigma = to_bytes(&self.sigma);
        self.g(&ZERO, &sigma);
    }
}

fn to_words(block: &Block) -> [u64; 8] {
    let mut words = [0u64; 8];
    for (w, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *w = u64::from_le_bytes(buf);
    }
    words
}

fn to_bytes(words: &[u64; 8]) -> Block {
    let mut block = ZERO;
    for (chunk, v) in block.chunks_exact_mut(8).zip(words.iter()) {
        chunk.copy_from_slice(&v.to_le_bytes());
    }
    block
}

/// `a += b mod 2^512`; the final carry is dropped.
fn add_assign_512(a: &mut [u64; 8], b: &[u64; 8]) {
    let mut carry = 0;
    for (a, b) in a.iter_mut().zip(b.iter()) {
        adc(a, *b, &mut carry);
    }
}

#[inline(always)]
fn adc(a: &mut u64, b: u64, carry: &mut u64) {
    let ret = (*a as u128) + (b as u128) + (*carry as u128);
    *a = ret as u64;
    *carry = (ret >> 64) as u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_addition_carries_across_limbs() {
        let mut a = [u64::MAX, u64::MAX, 0, 0, 0, 0, 0, 0];
        add_assign_512(&mut a, &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(a, [0, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn counter_addition_wraps_mod_2_512() {
        let mut a = [u64::MAX; 8];
        add_assign_512(&mut a, &[2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(a, [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn checksum_is_modular_sum_not_xor() {
        let mut state = StreebogState::new(ZERO);
        let mut block = ZERO;
        block[0] = 0xff;
        state.update_sigma(&block);
        state.update_sigma(&block);
        // 0xff + 0xff = 0x1fe: a xor would have cleared the byte instead
        assert_eq!(state.sigma[0], 0x1fe);
    }

    #[test]
    fn length_counter_counts_bits() {
        let mut state = StreebogState::new(ZERO);
        state.update_n(BLOCK_SIZE);
        state.update_n(3);
        assert_eq!(state.n[0], 512 + 24);
    }

    #[test]
    fn words_and_bytes_are_little_endian() {
        let mut block = ZERO;
        block[0] = 0x01;
        block[9] = 0x02;
        let words = to_words(&block);
        assert_eq!(words[0], 1);
        assert_eq!(words[1], 0x0200);
        assert_eq!(to_bytes(&words), block);
    }
}
