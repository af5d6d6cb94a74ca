//! Pure Rust BLAKE2b, BLAKE2s and BLAKE2X
//!
//! - [`State`] / [`Params`]: the full BLAKE2 interface, keyed hashing, salts,
//!   personalization and tree parameters.
//! - [`hash::Blake2b`] / [`hash::Blake2s`]: fixed-size digests with the length checked at
//!   compile time.
//! - [`Blake2x`] / [`XofReader`]: the BLAKE2X extendable-output construction, with random
//!   access into the output.
//!
//! # Example
//!
//! ```
//! use blake2x::{blake2b, Blake2sParams};
//!
//! # fn main() -> Result<(), blake2x::Error> {
//! let digest = blake2b(b"abc");
//! assert_eq!(digest.len(), 64);
//!
//! let mut params = Blake2sParams::new();
//! params.digest_length(16)?.key(b"secret")?;
//!
//! let mut state = params.to_state();
//! state.update(b"hello ")?;
//! state.update(b"world")?;
//! assert_eq!(state.finalize()?, params.hash(b"hello world"));
//! # Ok(()) }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::all
)]
// lengths are bounded by the parameter block before any narrowing cast
#![allow(clippy::cast_possible_truncation)]
// stupid lint IMO
#![allow(clippy::module_name_repetitions)]
// this devalues things which actually require the must-use attribute
#![allow(clippy::must_use_candidate)]
// I don't care for the assertion in my panic API where I am checking if OK. This is just for
// more controlled error messages.
#![allow(clippy::manual_assert)]
// I don't need a linter lecturing me on performance
#![allow(clippy::inline_always)]
// I am doing constant time bitwise hacks
#![allow(clippy::cast_sign_loss)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod sealed;
mod error;

pub mod opaque_res;
pub mod ct;
pub mod word;
pub mod compress;
pub mod params;
pub mod state;
pub mod digest;
pub mod hash;
pub mod xof;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Unspecified, MakeOpaque};
pub use ct::ct_eq;
pub use word::Word;
pub use digest::Digest;
pub use params::{Params, Blake2bParams, Blake2sParams};
pub use state::{State, Blake2bState, Blake2sState};
pub use hash::{Blake2b, Blake2s};
pub use xof::{
    Blake2x, Blake2xb, Blake2xs,
    Blake2xParams, Blake2xbParams, Blake2xsParams,
    XofReader, Xof, Variant,
    DEFAULT_OUTPUT_BITS
};

alloc! {
    pub use xof::blake2x;
}

/// Unkeyed BLAKE2b with a 64 byte digest.
///
/// # Example
///
/// ```
/// use blake2x::blake2b;
/// use hex_literal::hex;
///
/// let digest = blake2b(b"abc");
/// assert_eq!(
///     digest,
///     hex!(
///         "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1"
///         "7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
///     )
/// );
/// ```
#[inline]
pub fn blake2b(input: &[u8]) -> Digest {
    Blake2bParams::new().hash(input)
}

/// Unkeyed BLAKE2s with a 32 byte digest.
///
/// # Example
///
/// ```
/// use blake2x::blake2s;
/// use hex_literal::hex;
///
/// let digest = blake2s(b"abc");
/// assert_eq!(
///     digest,
///     hex!("508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982")
/// );
/// ```
#[inline]
pub fn blake2s(input: &[u8]) -> Digest {
    Blake2sParams::new().hash(input)
}

#[must_use]
pub(crate) const fn const_lte<const L: usize, const MAX: u32>() -> bool {
    L <= (MAX as usize)
}

#[must_use]
pub(crate) const fn const_gte<const L: usize, const MIN: usize>() -> bool {
    L >= MIN
}

#[inline]
#[must_use]
pub(crate) const fn gte<const MIN: usize>(value: usize) -> bool {
    value >= MIN
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn one_shots_match_streaming() {
        let input = b"The quick brown fox jumps over the lazy dog";

        let mut b = Blake2bParams::new().to_state();
        b.update(&input[..10]).unwrap();
        b.update(&input[10..]).unwrap();
        assert_eq!(b.finalize().unwrap(), blake2b(input));

        let mut s = Blake2sParams::new().to_state();
        s.update(input).unwrap();
        assert_eq!(s.finalize().unwrap(), blake2s(input));
    }

    #[test]
    fn const_helpers() {
        assert!(const_lte::<64, 64>());
        assert!(!const_lte::<65, 64>());
        assert!(const_gte::<32, 32>());
        assert!(!const_gte::<31, 32>());
        assert!(gte::<16>(16));
        assert!(!gte::<16>(15));
    }
}
