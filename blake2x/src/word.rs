//! Machine Words
//!
//! Everything above this module is written against "a machine word of `W` bits". The two
//! implementations, [`u64`] for BLAKE2b and [`u32`] for BLAKE2s, carry the constants which
//! distinguish the variants: the initialization vector, the rotation distances of `G`, the
//! number of rounds and the sizes of every parameter block field.
//!
//! This trait is sealed, BLAKE2 is only defined over these two word sizes.
use crate::sealed::Sealed;
use core::fmt::Debug;
use core::ops::{BitXor, BitXorAssign};
use zeroize::DefaultIsZeroes;

/// A BLAKE2 machine word.
pub trait Word:
    Sealed + Copy + Default + Ord + Debug
    + BitXor<Output = Self> + BitXorAssign
    + DefaultIsZeroes + Send + Sync + 'static
{
    /// The variant name, used in diagnostics.
    const NAME: &'static str;
    /// Width of the word in bits.
    const BITS: u32;
    /// Width of the word in bytes.
    const BYTES: usize;
    /// The zero word.
    const ZERO: Self;
    /// The all-bits-set word, used for the finalization flags.
    const MAX: Self;
    /// The initialization vector (the SHA-512 / SHA-256 IV).
    const IV: [Self; 8];
    /// Number of rounds of the compression function.
    const ROUNDS: usize;
    /// Rotation distances `R1..R4` of the mixing function `G`.
    const ROTATIONS: [u32; 4];

    /// Size of a message block in bytes (`16` words).
    const BLOCK_BYTES: usize;
    /// Maximum digest length in bytes, also the size of a BLAKE2X node.
    const MAX_DIGEST_BYTES: usize;
    /// Maximum key length in bytes.
    const MAX_KEY_BYTES: usize;
    /// Salt field width in bytes.
    const SALT_BYTES: usize;
    /// Personalization field width in bytes.
    const PERSONAL_BYTES: usize;
    /// Size of the serialized parameter block (`8` words).
    const PARAM_BYTES: usize;
    /// Width of the node offset field in bytes.
    const NODE_OFFSET_BYTES: usize;
    /// Largest node offset the field can hold when no XOF length shares it.
    const MAX_NODE_OFFSET: u64;
    /// Largest value of the BLAKE2X XOF length field, reserved as the "unknown length" sentinel.
    const XOF_LENGTH_UNKNOWN: u32;

    /// A message block buffer.
    type Block: AsRef<[u8]> + AsMut<[u8]> + Copy + Send + Sync;
    /// A serialized parameter block.
    type ParamBlock: AsRef<[u8]> + AsMut<[u8]> + Copy + Send + Sync;

    /// An all-zero message block.
    const ZERO_BLOCK: Self::Block;
    /// An all-zero parameter block.
    const ZERO_PARAMS: Self::ParamBlock;

    /// Wraparound addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Rotate right by `n` bits, `n` must be less than [`Self::BITS`].
    fn rotr(self, n: u32) -> Self;

    /// Read a word from exactly [`Self::BYTES`] little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Write the word as little-endian bytes into exactly [`Self::BYTES`] bytes.
    fn write_le(self, out: &mut [u8]);

    /// Convert a byte count no larger than a block into a word.
    fn from_len(len: usize) -> Self;

    /// Widen the word for reporting.
    fn to_u128(self) -> u128;

    /// Load a full message block as sixteen little-endian words.
    #[inline(always)]
    fn load_block(block: &[u8]) -> [Self; 16] {
        debug_assert_eq!(block.len(), Self::BLOCK_BYTES);
        let mut m = [Self::ZERO; 16];

        for (word, chunk) in m.iter_mut().zip(block.chunks_exact(Self::BYTES)) {
            *word = Self::from_le_slice(chunk);
        }

        m
    }

    /// Advance the two-word byte counter by `len`, carrying into the high word.
    #[inline(always)]
    fn counter_add(t: &mut [Self; 2], len: usize) {
        let inc = Self::from_len(len);
        t[0] = t[0].wrapping_add(inc);
        t[1] = t[1].wrapping_add(Self::from_len(usize::from(t[0] < inc)));
    }

    /// The counter as a single integer.
    #[inline]
    fn counter_value(t: &[Self; 2]) -> u128 {
        t[0].to_u128() | (t[1].to_u128() << Self::BITS)
    }
}

macro_rules! impl_word {
    (
        $word:ty, name: $name:literal, rounds: $rounds:literal,
        rotations: $rot:expr, node_offset_bytes: $nob:literal, xof_unknown: $xof:expr,
        iv: $iv:expr $(,)?
    ) => {
        impl Word for $word {
            const NAME: &'static str = $name;
            const BITS: u32 = <$word>::BITS;
            const BYTES: usize = core::mem::size_of::<$word>();
            const ZERO: Self = 0;
            const MAX: Self = <$word>::MAX;
            const IV: [Self; 8] = $iv;
            const ROUNDS: usize = $rounds;
            const ROTATIONS: [u32; 4] = $rot;

            const BLOCK_BYTES: usize = 16 * Self::BYTES;
            const MAX_DIGEST_BYTES: usize = 8 * Self::BYTES;
            const MAX_KEY_BYTES: usize = 8 * Self::BYTES;
            const SALT_BYTES: usize = 2 * Self::BYTES;
            const PERSONAL_BYTES: usize = 2 * Self::BYTES;
            const PARAM_BYTES: usize = 8 * Self::BYTES;
            const NODE_OFFSET_BYTES: usize = $nob;
            const MAX_NODE_OFFSET: u64 = u64::MAX >> (64 - 8 * $nob);
            const XOF_LENGTH_UNKNOWN: u32 = $xof;

            type Block = [u8; 16 * core::mem::size_of::<$word>()];
            type ParamBlock = [u8; 8 * core::mem::size_of::<$word>()];

            const ZERO_BLOCK: Self::Block = [0u8; 16 * core::mem::size_of::<$word>()];
            const ZERO_PARAMS: Self::ParamBlock = [0u8; 8 * core::mem::size_of::<$word>()];

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$word>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n)
            }

            #[inline(always)]
            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$word>()];
                buf.copy_from_slice(bytes);
                <$word>::from_le_bytes(buf)
            }

            #[inline(always)]
            fn write_le(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_le_bytes());
            }

            #[inline(always)]
            fn from_len(len: usize) -> Self {
                debug_assert!(len <= Self::BLOCK_BYTES);
                len as $word
            }

            #[inline(always)]
            fn to_u128(self) -> u128 {
                u128::from(self)
            }
        }
    };
}

impl_word! {
    u64, name: "BLAKE2b", rounds: 12,
    rotations: [32, 24, 16, 63],
    node_offset_bytes: 8,
    xof_unknown: u32::MAX,
    iv: [
        0x6a09_e667_f3bc_c908, 0xbb67_ae85_84ca_a73b,
        0x3c6e_f372_fe94_f82b, 0xa54f_f53a_5f1d_36f1,
        0x510e_527f_ade6_82d1, 0x9b05_688c_2b3e_6c1f,
        0x1f83_d9ab_fb41_bd6b, 0x5be0_cd19_137e_2179,
    ],
}

impl_word! {
    u32, name: "BLAKE2s", rounds: 10,
    rotations: [16, 12, 8, 7],
    node_offset_bytes: 6,
    xof_unknown: u16::MAX as u32,
    iv: [
        0x6a09_e667, 0xbb67_ae85,
        0x3c6e_f372, 0xa54f_f53a,
        0x510e_527f, 0x9b05_688c,
        0x1f83_d9ab, 0x5be0_cd19,
    ],
}
