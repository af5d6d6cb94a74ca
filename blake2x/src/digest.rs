//! Variable Length Digests
use crate::ct::ct_eq;
use core::fmt;

/// Largest digest of any BLAKE2 variant.
const MAX_BYTES: usize = 64;

/// A BLAKE2 digest of up to `64` bytes.
///
/// Equality is checked in constant-time, a `Digest` may be compared directly against an
/// expected MAC tag.
///
/// # Example
///
/// ```
/// use blake2x::{blake2b, blake2s};
///
/// let digest = blake2s(b"abc");
/// assert_eq!(digest.len(), 32);
/// assert_eq!(digest, blake2s(b"abc"));
/// assert_ne!(digest.as_bytes(), &blake2b(b"abc").as_bytes()[..32]);
/// ```
#[derive(Copy, Clone)]
pub struct Digest {
    bytes: [u8; MAX_BYTES],
    len: u8,
}

impl Digest {
    /// Copy the first `len` bytes of a serialized chain value.
    #[inline]
    pub(crate) fn new(bytes: &[u8], len: usize) -> Self {
        debug_assert!(len <= MAX_BYTES && len <= bytes.len());
        let mut out = [0u8; MAX_BYTES];
        out[..len].copy_from_slice(&bytes[..len]);
        Self { bytes: out, len: len as u8 }
    }

    /// The digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Length of the digest in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` for a zero-length digest.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Digest {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self, other)
    }
}

impl Eq for Digest {}

impl PartialEq<[u8]> for Digest {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        ct_eq(self, other)
    }
}

impl PartialEq<&[u8]> for Digest {
    #[inline]
    fn eq(&self, other: &&[u8]) -> bool {
        ct_eq(self, *other)
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Digest {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        ct_eq(self, other)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Digest(")?;
        fmt::LowerHex::fmt(self, f)?;
        f.write_str(")")
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
