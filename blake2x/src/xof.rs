//! BLAKE2X Extendable Output
//!
//! BLAKE2X first hashes the message into a root digest `H0`, with the requested output length
//! stored in the parameter block. The output is then produced node by node: node `k` hashes
//! `H0` under a parameter block carrying node offset `k`, and the output is the concatenation
//! of every node digest. A node depends only on `H0`, `k` and the fixed node parameters, so any
//! part of the output can be computed independently of the rest.
//!
//! # Example
//!
//! ```
//! use blake2x::Blake2xbParams;
//!
//! # fn main() -> Result<(), blake2x::Error> {
//! let mut params = Blake2xbParams::new();
//! params.personal(b"my application")?.output_len(200)?;
//!
//! let mut xof = params.to_blake2x();
//! xof.update(b"hello world")?;
//!
//! let mut reader = xof.finalize_xof()?;
//! let mut out = [0u8; 200];
//! reader.squeeze(&mut out)?;
//!
//! // random access into the same output
//! assert_eq!(reader.node(1)?.as_bytes(), &out[64..128]);
//! # Ok(()) }
//! ```
use crate::digest::Digest;
use crate::error::Error;
use crate::params::Params;
use crate::state::State;
use crate::word::Word;
use core::fmt;
use core::str::FromStr;
use zeroize::Zeroize;

/// The output length used by [`blake2x`] when no length is requested, in bits.
///
/// This default is specific to this crate and not part of BLAKE2X. The output is derived with
/// the "unknown length" marker in the parameter block, so it is a prefix of the output of an
/// unknown-length [`XofReader`].
pub const DEFAULT_OUTPUT_BITS: u64 = 2056;

/// Output extraction from an extendable-output function.
pub trait Xof: Clone {
    /// Fill `out` with the next bytes of output.
    ///
    /// # Errors
    ///
    /// If the output is exhausted before `out` is filled, in which case nothing is written.
    fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Error>;
}

/// The BLAKE2 variant underlying a BLAKE2X computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// BLAKE2Xb, over 64-bit words.
    Blake2b,
    /// BLAKE2Xs, over 32-bit words.
    Blake2s,
}

impl Variant {
    /// The short tag of the variant, `2b` or `2s`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Blake2b => "2b",
            Self::Blake2s => "2s",
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Parse a variant tag.
    ///
    /// # Errors
    ///
    /// [`Error::Variant`] unless the tag is `2b` or `2s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2b" => Ok(Self::Blake2b),
            "2s" => Ok(Self::Blake2s),
            _ => Err(Error::Variant),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Size of one BLAKE2X node in bytes, the variant's maximum digest length.
#[inline]
const fn node_size<W: Word>() -> u64 {
    W::MAX_DIGEST_BYTES as u64
}

/// BLAKE2X parameters: key, salt, personalization and output length.
///
/// Without a declared length the output length is unknown, and the reader may produce up to
/// `2^32` nodes of output.
pub struct Blake2xParams<W: Word> {
    root: Params<W>,
    node: Params<W>,
    output_len: Option<u32>,
}

/// Parameters for BLAKE2Xb.
pub type Blake2xbParams = Blake2xParams<u64>;
/// Parameters for BLAKE2Xs.
pub type Blake2xsParams = Blake2xParams<u32>;

impl<W: Word> Default for Blake2xParams<W> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> Clone for Blake2xParams<W> {
    fn clone(&self) -> Self {
        Self { root: self.root.clone(), node: self.node.clone(), output_len: self.output_len }
    }
}

impl<W: Word> fmt::Debug for Blake2xParams<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2xParams")
            .field("variant", &W::NAME)
            .field("output_len", &self.output_len)
            .finish_non_exhaustive()
    }
}

impl<W: Word> Blake2xParams<W> {
    /// Create parameters with no key, salt or personalization and an unknown output length.
    pub fn new() -> Self {
        let mut root = Params::new();
        root.xof_length = W::XOF_LENGTH_UNKNOWN;

        let mut node = Params::new();
        node.fanout(0)
            .max_depth(0)
            .max_leaf_length(W::MAX_DIGEST_BYTES as u32);
        node.inner_hash_length = W::MAX_DIGEST_BYTES as u8;
        node.xof_length = W::XOF_LENGTH_UNKNOWN;

        Self { root, node, output_len: None }
    }

    /// Set the key of the root hash.
    ///
    /// # Errors
    ///
    /// [`Error::KeyLength`] if the key exceeds `64` bytes (BLAKE2Xb) or `32` bytes (BLAKE2Xs).
    pub fn key(&mut self, key: &[u8]) -> Result<&mut Self, Error> {
        self.root.key(key)?;
        Ok(self)
    }

    /// Set the salt of the root and of every node.
    ///
    /// # Errors
    ///
    /// [`Error::SaltLength`] if the salt exceeds `16` bytes (BLAKE2Xb) or `8` bytes (BLAKE2Xs).
    pub fn salt(&mut self, salt: &[u8]) -> Result<&mut Self, Error> {
        self.root.salt(salt)?;
        self.node.salt(salt)?;
        Ok(self)
    }

    /// Set the personalization of the root and of every node.
    ///
    /// # Errors
    ///
    /// [`Error::PersonalLength`] if the personalization exceeds `16` bytes (BLAKE2Xb) or `8`
    /// bytes (BLAKE2Xs).
    pub fn personal(&mut self, personal: &[u8]) -> Result<&mut Self, Error> {
        self.root.personal(personal)?;
        self.node.personal(personal)?;
        Ok(self)
    }

    /// Declare the output length in bytes.
    ///
    /// # Errors
    ///
    /// [`Error::OutputLength`] if `len` is zero, or does not fit the XOF length field without
    /// colliding with the unknown-length marker (`2^32 - 2` bytes for BLAKE2Xb, `65534` bytes
    /// for BLAKE2Xs).
    pub fn output_len(&mut self, len: u32) -> Result<&mut Self, Error> {
        if len == 0 || len >= W::XOF_LENGTH_UNKNOWN { return Err(Error::OutputLength) }

        self.root.xof_length(len)?;
        self.node.xof_length(len)?;
        self.output_len = Some(len);
        Ok(self)
    }

    /// Declare the output length in bits, rounded up to whole bytes. `0` marks the output
    /// length as unknown.
    ///
    /// # Errors
    ///
    /// [`Error::OutputLength`] if the length in bytes cannot be declared, see
    /// [`output_len`](Self::output_len).
    pub fn output_bits(&mut self, bits: u64) -> Result<&mut Self, Error> {
        if bits == 0 { return Ok(self.unknown_length()) }

        let len = u32::try_from(bits.div_ceil(8)).map_err(|_| Error::OutputLength)?;
        self.output_len(len)
    }

    /// Mark the output length as unknown.
    pub fn unknown_length(&mut self) -> &mut Self {
        // node offsets are only ever set on copies of the templates
        self.root.xof_length = W::XOF_LENGTH_UNKNOWN;
        self.node.xof_length = W::XOF_LENGTH_UNKNOWN;
        self.output_len = None;
        self
    }

    /// The declared output length in bytes, `None` when unknown.
    #[inline]
    pub const fn declared_len(&self) -> Option<u32> {
        self.output_len
    }

    /// Start a BLAKE2X computation.
    pub fn to_blake2x(&self) -> Blake2x<W> {
        Blake2x {
            root: self.root.to_state(),
            node: self.node.clone(),
            output_len: self.output_len,
        }
    }
}

/// A streaming BLAKE2X computation, absorbing the message into the root hash.
pub struct Blake2x<W: Word> {
    root: State<W>,
    node: Params<W>,
    output_len: Option<u32>,
}

/// A streaming BLAKE2Xb computation.
pub type Blake2xb = Blake2x<u64>;
/// A streaming BLAKE2Xs computation.
pub type Blake2xs = Blake2x<u32>;

impl<W: Word> Clone for Blake2x<W> {
    fn clone(&self) -> Self {
        Self { root: self.root.clone(), node: self.node.clone(), output_len: self.output_len }
    }
}

impl<W: Word> fmt::Debug for Blake2x<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2x")
            .field("root", &self.root)
            .field("output_len", &self.output_len)
            .finish_non_exhaustive()
    }
}

impl<W: Word> Blake2x<W> {
    /// Absorb message bytes into the root hash.
    ///
    /// # Errors
    ///
    /// [`Error::Finalized`] if the root hash was already finalized.
    #[inline]
    pub fn update(&mut self, input: &[u8]) -> Result<(), Error> {
        self.root.update(input)
    }

    /// Finalize the root hash, returning a reader over the output.
    ///
    /// # Errors
    ///
    /// [`Error::Finalized`] if the root hash was already finalized.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = "debug"))]
    pub fn finalize_xof(mut self) -> Result<XofReader<W>, Error> {
        let mut h0 = [0u8; 64];
        self.root.finalize_into(&mut h0)?;

        let total = self.output_len.map_or(
            (u64::from(u32::MAX) + 1) * node_size::<W>(),
            u64::from
        );

        event!(
            debug,
            variant = W::NAME,
            output_len = total,
            nodes = total.div_ceil(node_size::<W>()),
            "root hash finalized"
        );

        Ok(XofReader { h0, node: self.node, total, position: 0, cached: None })
    }
}

std! {
    use std::io as std_io;

    impl<W: Word> std_io::Write for Blake2x<W> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> std_io::Result<usize> {
            self.update(buf).map(|()| buf.len()).map_err(std_io::Error::other)
        }

        #[inline]
        fn flush(&mut self) -> std_io::Result<()> {
            Ok(())
        }
    }

    impl<W: Word> std_io::Read for XofReader<W> {
        /// Reads up to `buf.len()` bytes, returning `0` once the output is exhausted.
        fn read(&mut self, buf: &mut [u8]) -> std_io::Result<usize> {
            let len = buf.len().min(usize::try_from(self.remaining()).unwrap_or(usize::MAX));
            self.squeeze(&mut buf[..len]).map_err(std_io::Error::other)?;
            Ok(len)
        }
    }
}

/// A reader over BLAKE2X output.
///
/// Output is read sequentially through [`squeeze`](Self::squeeze), or randomly through
/// [`seek`](Self::seek) and [`node`](Self::node). `node` takes `&self`, so nodes may be derived
/// concurrently from a shared reader.
pub struct XofReader<W: Word> {
    h0: [u8; 64],
    node: Params<W>,
    total: u64,
    position: u64,
    cached: Option<(u32, Digest)>,
}

impl<W: Word> XofReader<W> {
    /// The root digest `H0`.
    #[inline]
    pub fn h0(&self) -> &[u8] {
        &self.h0[..W::MAX_DIGEST_BYTES]
    }

    /// Total output length in bytes.
    #[inline]
    pub const fn output_len(&self) -> u64 {
        self.total
    }

    /// The offset of the next byte [`squeeze`](Self::squeeze) will produce.
    #[inline]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Bytes left before the output is exhausted.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.total - self.position
    }

    /// Number of nodes making up the output.
    #[inline]
    pub const fn node_count(&self) -> u64 {
        self.total.div_ceil(node_size::<W>())
    }

    /// Derive node `k` of the output.
    ///
    /// Every node is a full `64` (BLAKE2Xb) or `32` (BLAKE2Xs) bytes except for the last node
    /// of a declared output length, which holds the remainder.
    ///
    /// # Errors
    ///
    /// [`Error::OutputExhausted`] if the output has no node `k`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = "trace"))]
    pub fn node(&self, k: u32) -> Result<Digest, Error> {
        let start = u64::from(k) * node_size::<W>();
        if start >= self.total { return Err(Error::OutputExhausted) }

        let len = (self.total - start).min(node_size::<W>()) as usize;

        let mut params = self.node.clone();
        params.digest_length(len)?.node_offset(u64::from(k))?;

        Ok(params.hash(self.h0()))
    }

    /// Move the read position to `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutputExhausted`] if `position` is past the end of the output.
    pub fn seek(&mut self, position: u64) -> Result<(), Error> {
        if position > self.total { return Err(Error::OutputExhausted) }
        self.position = position;
        Ok(())
    }

    #[inline]
    fn node_cached(&mut self, k: u32) -> Result<Digest, Error> {
        match self.cached {
            Some((cached, digest)) if cached == k => Ok(digest),
            _ => {
                let digest = self.node(k)?;
                self.cached = Some((k, digest));
                Ok(digest)
            }
        }
    }

    /// Fill `out` with the next bytes of output.
    ///
    /// # Errors
    ///
    /// [`Error::OutputExhausted`] if fewer than `out.len()` bytes remain, nothing is written.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() as u64 > self.remaining() { return Err(Error::OutputExhausted) }

        let mut written = 0;
        while written < out.len() {
            let k = (self.position / node_size::<W>()) as u32;
            let offset = (self.position % node_size::<W>()) as usize;

            let digest = self.node_cached(k)?;
            let take = (digest.len() - offset).min(out.len() - written);

            out[written..written + take].copy_from_slice(&digest.as_bytes()[offset..offset + take]);
            written += take;
            self.position += take as u64;
        }

        Ok(())
    }
}

impl<W: Word> Xof for XofReader<W> {
    #[inline]
    fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Error> {
        Self::squeeze(self, out)
    }
}

impl<W: Word> Clone for XofReader<W> {
    fn clone(&self) -> Self {
        Self {
            h0: self.h0,
            node: self.node.clone(),
            total: self.total,
            position: self.position,
            cached: self.cached,
        }
    }
}

impl<W: Word> Drop for XofReader<W> {
    fn drop(&mut self) {
        self.h0.zeroize();
    }
}

impl<W: Word> fmt::Debug for XofReader<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XofReader")
            .field("variant", &W::NAME)
            .field("output_len", &self.total)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

alloc! {
    /// Compute BLAKE2X output in one shot.
    ///
    /// # Arguments
    ///
    /// * `variant` - BLAKE2Xb or BLAKE2Xs.
    /// * `input` - The message.
    /// * `key` - The key, empty for unkeyed hashing.
    /// * `salt` - The salt, empty for none.
    /// * `personal` - The personalization, empty for none.
    /// * `output_bits` - The output length in bits, rounded up to whole bytes. `0` produces
    ///   [`DEFAULT_OUTPUT_BITS`] of output derived under the unknown-length marker.
    ///
    /// # Errors
    ///
    /// Any configuration error of [`Blake2xParams`].
    ///
    /// # Example
    ///
    /// ```
    /// use blake2x::{blake2x, Variant};
    ///
    /// # fn main() -> Result<(), blake2x::Error> {
    /// let out = blake2x(Variant::Blake2s, b"abc", b"", b"", b"", 1000)?;
    /// assert_eq!(out.len(), 125);
    ///
    /// let default = blake2x("2b".parse()?, b"abc", b"", b"", b"", 0)?;
    /// assert_eq!(default.len(), 257);
    /// # Ok(()) }
    /// ```
    pub fn blake2x(
        variant: Variant,
        input: &[u8],
        key: &[u8],
        salt: &[u8],
        personal: &[u8],
        output_bits: u64
    ) -> Result<alloc::vec::Vec<u8>, Error> {
        match variant {
            Variant::Blake2b => blake2x_with::<u64>(input, key, salt, personal, output_bits),
            Variant::Blake2s => blake2x_with::<u32>(input, key, salt, personal, output_bits),
        }
    }

    fn blake2x_with<W: Word>(
        input: &[u8],
        key: &[u8],
        salt: &[u8],
        personal: &[u8],
        output_bits: u64
    ) -> Result<alloc::vec::Vec<u8>, Error> {
        let mut params = Blake2xParams::<W>::new();
        params.key(key)?.salt(salt)?.personal(personal)?.output_bits(output_bits)?;

        let len = params.declared_len().map_or(DEFAULT_OUTPUT_BITS.div_ceil(8), u64::from);

        let mut xof = params.to_blake2x();
        xof.update(input)?;
        let mut reader = xof.finalize_xof()?;

        let mut out = alloc::vec![0u8; len as usize];
        reader.squeeze(&mut out)?;
        Ok(out)
    }
}
