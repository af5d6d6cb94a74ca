//! The BLAKE2 Compression Function (RFC 7693, Section 3.2)
//!
//! This is the one hot path of the crate. It is a pure function of its inputs, allocation free,
//! and free of data dependent branches; the only loop bound is the round count of the variant.

#![allow(clippy::indexing_slicing)] // fixed schedule indices

use crate::word::Word;

/// The message word schedule. BLAKE2b runs 12 rounds and so reuses the first two rows, BLAKE2s
/// runs 10.
pub const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// The mixing function `G`.
#[inline(always)]
#[allow(clippy::many_single_char_names)]
fn g<W: Word>(v: &mut [W; 16], a: usize, b: usize, c: usize, d: usize, x: W, y: W) {
    let [r1, r2, r3, r4] = W::ROTATIONS;

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotr(r1);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotr(r2);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotr(r3);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotr(r4);
}

/// Compress one message block into the chain value.
///
/// # Arguments
///
/// * `h` - The chain value, updated in place.
/// * `m` - The message block as sixteen little-endian words.
/// * `t` - The byte counter (low word, high word), including this block.
/// * `f` - The finalization flags, each either all-zero or all-bits-set.
///
/// # Example
///
/// ```
/// use blake2x::compress::compress;
/// use blake2x::Word;
///
/// // BLAKE2s-256("abc"), RFC 7693 Appendix B.
/// let mut h = <u32 as Word>::IV;
/// h[0] ^= 0x0101_0020;
///
/// let mut block = [0u8; 64];
/// block[..3].copy_from_slice(b"abc");
///
/// compress(&mut h, &<u32 as Word>::load_block(&block), &[3, 0], &[u32::MAX, 0]);
/// assert_eq!(h[0].to_le_bytes(), [0x50, 0x8c, 0x5e, 0x8c]);
/// ```
#[inline]
pub fn compress<W: Word>(h: &mut [W; 8], m: &[W; 16], t: &[W; 2], f: &[W; 2]) {
    let mut v = [W::ZERO; 16];

    v[..8].copy_from_slice(h);
    v[8..12].copy_from_slice(&W::IV[..4]);
    v[12] = t[0] ^ W::IV[4];
    v[13] = t[1] ^ W::IV[5];
    v[14] = f[0] ^ W::IV[6];
    v[15] = f[1] ^ W::IV[7];

    for s in &SIGMA[..W::ROUNDS] {
        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for (i, word) in h.iter_mut().enumerate() {
        *word ^= v[i] ^ v[i + 8];
    }
}
