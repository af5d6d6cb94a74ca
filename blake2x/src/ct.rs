//! Constant-Time Comparison
//!
//! Digest comparison for keyed BLAKE2 must not leak the position of the first mismatching byte,
//! every comparison in this crate goes through [`ct_eq`].

#[inline(always)]
fn volatile(byte: u8) -> u8 {
    unsafe { core::ptr::read_volatile(&byte) }
}

#[inline(always)]
fn eq_hsb(xor: u8) -> u8 {
    volatile(xor | volatile(xor.wrapping_neg())) >> 7
}

/// Returns `1` if `a == b`, otherwise `0`, without branching on either value.
///
/// With optimizations LLVM rewrites `(xor | -xor) >> 7` into an `icmp`, the volatile reads keep
/// the mask arithmetic in the output assembly.
#[inline(always)]
#[must_use]
pub fn byte_eq(a: u8, b: u8) -> u8 {
    eq_hsb(b ^ a) ^ volatile(1)
}

/// Compare two slices in constant-time.
///
/// # Note
///
/// If the length of slice `a` and slice `b` are not equivalent, this will exit early. In short,
/// there is variable timing on length comparisons.
///
/// # Returns
///
/// * `0`: `a != b`
/// * `1`: `a == b`
#[must_use]
pub fn cmp_slice(a: &[u8], b: &[u8]) -> u8 {
    if a.len() != b.len() { return 0 }

    let mut res = volatile(1u8);

    for (l, r) in a.iter().zip(b.iter()) {
        res &= byte_eq(*l, *r);
    }

    res
}

/// Compare two slices in constant-time.
///
/// # Arguments
///
/// The two arguments being compared in constant-time, both of these arguments must implement
/// `AsRef<[u8]>` (such as `&str`, `&[u8]` itself, [`Digest`], etc.)
///
/// # Note
///
/// If the length of slice `a` and slice `b` are not equivalent, this will exit early. In short,
/// there is variable timing on length comparisons.
///
/// # Warning
///
/// Constant-time programming is nuanced, this implementation provides a *best-effort*
/// constant-time equivalence check. There is no guarantee of constant-time properties across all
/// existing hardware.
///
/// # Returns
///
/// `true` if `a == b`, `false` otherwise.
///
/// # Example
///
/// ```
/// use blake2x::{ct_eq, blake2b};
///
/// let tag = blake2b(b"hello world");
/// assert!(ct_eq(&tag, blake2b(b"hello world")));
/// assert!(!ct_eq(&tag, blake2b(b"hello worle")));
/// ```
///
/// [`Digest`]: crate::Digest
#[must_use]
pub fn ct_eq<A: AsRef<[u8]>, B: AsRef<[u8]>>(a: A, b: B) -> bool {
    cmp_slice(a.as_ref(), b.as_ref()) != 0
}
