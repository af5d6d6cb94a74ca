//! The BLAKE2 Parameter Block
//!
//! Every BLAKE2 instance is seeded by XOR-ing the initialization vector with a fixed-layout
//! record describing the digest length, the key length, the tree parameters, the salt and the
//! personalization. [`Params`] is a validated builder over this record, oversized fields are
//! rejected when they are set rather than being truncated.
//!
//! # Layout
//!
//! | offset (b / s) | field            | BLAKE2b | BLAKE2s |
//! |----------------|------------------|---------|---------|
//! | 0              | digest length    | 1       | 1       |
//! | 1              | key length       | 1       | 1       |
//! | 2              | fanout           | 1       | 1       |
//! | 3              | max depth        | 1       | 1       |
//! | 4              | max leaf length  | 4       | 4       |
//! | 8              | node offset      | 8       | 6       |
//! | 16 / 14        | node depth       | 1       | 1       |
//! | 17 / 15        | inner length     | 1       | 1       |
//! | 18 / -         | reserved         | 14      | 0       |
//! | 32 / 16        | salt             | 16      | 8       |
//! | 48 / 24        | personalization  | 16      | 8       |
//!
//! BLAKE2X stores its output length in the upper part of the node offset field (`4` bytes at
//! offset `12` for BLAKE2b, `2` bytes at offset `12` for BLAKE2s), leaving `32` bits for the
//! node offset itself.
use crate::digest::Digest;
use crate::error::Error;
use crate::state::State;
use crate::word::Word;
use zeroize::Zeroize;

/// Salt and personalization storage, sized for the larger variant.
const FIELD_BYTES: usize = 16;

/// A BLAKE2 parameter block builder.
///
/// The defaults describe sequential (non-tree) hashing with the variant's maximum digest
/// length: fanout `1`, max depth `1`, everything else zero.
///
/// # Example
///
/// ```
/// use blake2x::Blake2bParams;
///
/// # fn main() -> Result<(), blake2x::Error> {
/// let mut params = Blake2bParams::new();
/// params
///     .digest_length(32)?
///     .key(b"my secret key")?
///     .salt(b"salty")?
///     .personal(b"my application")?;
///
/// let digest = params.hash(b"hello world");
/// assert_eq!(digest.len(), 32);
///
/// // Oversized fields are rejected, never truncated.
/// assert!(params.salt(&[0u8; 17]).is_err());
/// # Ok(()) }
/// ```
pub struct Params<W: Word> {
    pub(crate) digest_length: u8,
    pub(crate) key_length: u8,
    pub(crate) key: W::Block,
    pub(crate) fanout: u8,
    pub(crate) max_depth: u8,
    pub(crate) max_leaf_length: u32,
    pub(crate) node_offset: u64,
    pub(crate) xof_length: u32,
    pub(crate) node_depth: u8,
    pub(crate) inner_hash_length: u8,
    salt: [u8; FIELD_BYTES],
    personal: [u8; FIELD_BYTES],
    pub(crate) last_node: bool,
}

/// Parameters for BLAKE2b.
pub type Blake2bParams = Params<u64>;
/// Parameters for BLAKE2s.
pub type Blake2sParams = Params<u32>;

impl<W: Word> Default for Params<W> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> Clone for Params<W> {
    fn clone(&self) -> Self {
        Self {
            digest_length: self.digest_length,
            key_length: self.key_length,
            key: self.key,
            fanout: self.fanout,
            max_depth: self.max_depth,
            max_leaf_length: self.max_leaf_length,
            node_offset: self.node_offset,
            xof_length: self.xof_length,
            node_depth: self.node_depth,
            inner_hash_length: self.inner_hash_length,
            salt: self.salt,
            personal: self.personal,
            last_node: self.last_node,
        }
    }
}

impl<W: Word> Params<W> {
    /// Create the default parameters for sequential hashing.
    pub fn new() -> Self {
        Self {
            digest_length: W::MAX_DIGEST_BYTES as u8,
            key_length: 0,
            key: W::ZERO_BLOCK,
            fanout: 1,
            max_depth: 1,
            max_leaf_length: 0,
            node_offset: 0,
            xof_length: 0,
            node_depth: 0,
            inner_hash_length: 0,
            salt: [0u8; FIELD_BYTES],
            personal: [0u8; FIELD_BYTES],
            last_node: false,
        }
    }

    /// Set the digest length in bytes, between `0` and the variant's maximum (`64` / `32`).
    ///
    /// # Errors
    ///
    /// [`Error::DigestLength`] if `len` exceeds the maximum.
    pub fn digest_length(&mut self, len: usize) -> Result<&mut Self, Error> {
        if len > W::MAX_DIGEST_BYTES { return Err(Error::DigestLength) }
        self.digest_length = len as u8;
        Ok(self)
    }

    /// Set the secret key, an empty key disables keyed hashing.
    ///
    /// The key is zero-padded to a full block and absorbed ahead of the message by every
    /// [`State`] built from these parameters. It is zeroed when the parameters are dropped.
    ///
    /// # Errors
    ///
    /// [`Error::KeyLength`] if the key exceeds `64` bytes (BLAKE2b) or `32` bytes (BLAKE2s).
    pub fn key(&mut self, key: &[u8]) -> Result<&mut Self, Error> {
        if key.len() > W::MAX_KEY_BYTES { return Err(Error::KeyLength) }

        self.key.as_mut().zeroize();
        self.key.as_mut()[..key.len()].copy_from_slice(key);
        self.key_length = key.len() as u8;
        Ok(self)
    }

    /// Set the salt, shorter salts are zero-padded on the right.
    ///
    /// # Errors
    ///
    /// [`Error::SaltLength`] if the salt exceeds `16` bytes (BLAKE2b) or `8` bytes (BLAKE2s).
    pub fn salt(&mut self, salt: &[u8]) -> Result<&mut Self, Error> {
        if salt.len() > W::SALT_BYTES { return Err(Error::SaltLength) }
        self.salt = padded(salt);
        Ok(self)
    }

    /// Set the personalization, shorter values are zero-padded on the right.
    ///
    /// # Errors
    ///
    /// [`Error::PersonalLength`] if the personalization exceeds `16` bytes (BLAKE2b) or `8`
    /// bytes (BLAKE2s).
    pub fn personal(&mut self, personal: &[u8]) -> Result<&mut Self, Error> {
        if personal.len() > W::PERSONAL_BYTES { return Err(Error::PersonalLength) }
        self.personal = padded(personal);
        Ok(self)
    }

    /// Set the tree fanout, `0` meaning unlimited.
    #[inline]
    pub fn fanout(&mut self, fanout: u8) -> &mut Self {
        self.fanout = fanout;
        self
    }

    /// Set the maximum tree depth, `0` meaning unlimited.
    #[inline]
    pub fn max_depth(&mut self, depth: u8) -> &mut Self {
        self.max_depth = depth;
        self
    }

    /// Set the maximum leaf length in bytes, `0` meaning unlimited.
    #[inline]
    pub fn max_leaf_length(&mut self, len: u32) -> &mut Self {
        self.max_leaf_length = len;
        self
    }

    /// Set the offset of this node within its tree level.
    ///
    /// # Errors
    ///
    /// [`Error::NodeOffset`] if the offset does not fit the node offset field: `64` bits for
    /// BLAKE2b, `48` bits for BLAKE2s, or `32` bits for either once an XOF length is set.
    pub fn node_offset(&mut self, offset: u64) -> Result<&mut Self, Error> {
        if offset > self.node_offset_limit() { return Err(Error::NodeOffset) }
        self.node_offset = offset;
        Ok(self)
    }

    /// Set the depth of this node in the tree, leaves being at depth `0`.
    #[inline]
    pub fn node_depth(&mut self, depth: u8) -> &mut Self {
        self.node_depth = depth;
        self
    }

    /// Set the inner hash length of the tree in bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InnerLength`] if `len` exceeds the variant's maximum digest length.
    pub fn inner_hash_length(&mut self, len: usize) -> Result<&mut Self, Error> {
        if len > W::MAX_DIGEST_BYTES { return Err(Error::InnerLength) }
        self.inner_hash_length = len as u8;
        Ok(self)
    }

    /// Set the BLAKE2X output length in bytes, sharing the upper part of the node offset field.
    ///
    /// `0` clears the field, [`Word::XOF_LENGTH_UNKNOWN`] marks the output length as unknown.
    ///
    /// # Errors
    ///
    /// - [`Error::OutputLength`] if `len` does not fit the field (`32` bits for BLAKE2b, `16`
    ///   bits for BLAKE2s).
    /// - [`Error::NodeOffset`] if a node offset wider than `32` bits is already set.
    pub fn xof_length(&mut self, len: u32) -> Result<&mut Self, Error> {
        if len > W::XOF_LENGTH_UNKNOWN { return Err(Error::OutputLength) }
        if len != 0 && self.node_offset > u64::from(u32::MAX) { return Err(Error::NodeOffset) }
        self.xof_length = len;
        Ok(self)
    }

    /// Mark the hashed node as the last node of its tree level, setting the second
    /// finalization flag.
    #[inline]
    pub fn last_node(&mut self, last: bool) -> &mut Self {
        self.last_node = last;
        self
    }

    #[inline]
    const fn node_offset_limit(&self) -> u64 {
        if self.xof_length == 0 {
            W::MAX_NODE_OFFSET
        } else {
            u32::MAX as u64
        }
    }

    /// The configured digest length in bytes.
    #[inline]
    pub const fn output_len(&self) -> usize {
        self.digest_length as usize
    }

    /// Serialize the parameter block, exactly `64` bytes for BLAKE2b and `32` for BLAKE2s.
    #[allow(clippy::indexing_slicing)]
    pub fn to_bytes(&self) -> W::ParamBlock {
        let mut block = W::ZERO_PARAMS;
        let out = block.as_mut();

        out[0] = self.digest_length;
        out[1] = self.key_length;
        out[2] = self.fanout;
        out[3] = self.max_depth;
        out[4..8].copy_from_slice(&self.max_leaf_length.to_le_bytes());

        let depth_at = 8 + W::NODE_OFFSET_BYTES;
        let offset = self.node_offset | (u64::from(self.xof_length) << 32);
        out[8..depth_at].copy_from_slice(&offset.to_le_bytes()[..W::NODE_OFFSET_BYTES]);

        out[depth_at] = self.node_depth;
        out[depth_at + 1] = self.inner_hash_length;

        let salt_at = W::PARAM_BYTES / 2;
        let personal_at = salt_at + W::SALT_BYTES;
        out[salt_at..personal_at].copy_from_slice(&self.salt[..W::SALT_BYTES]);
        out[personal_at..].copy_from_slice(&self.personal[..W::PERSONAL_BYTES]);

        block
    }

    /// The initial chain value, the parameter block read as eight little-endian words XOR-ed
    /// with the IV.
    pub fn to_words(&self) -> [W; 8] {
        let mut h = W::IV;
        let block = self.to_bytes();

        for (word, chunk) in h.iter_mut().zip(block.as_ref().chunks_exact(W::BYTES)) {
            *word ^= W::from_le_slice(chunk);
        }

        h
    }

    /// Create a streaming [`State`] from these parameters.
    #[inline]
    pub fn to_state(&self) -> State<W> {
        State::new(self)
    }

    /// Hash `input` in one shot under these parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use blake2x::Blake2sParams;
    ///
    /// let digest = Blake2sParams::new().hash(b"abc");
    /// assert_eq!(digest.as_bytes()[..4], [0x50, 0x8c, 0x5e, 0x8c]);
    /// ```
    pub fn hash(&self, input: &[u8]) -> Digest {
        let mut state = self.to_state();
        state.absorb(input);
        state.finalize_digest()
    }
}

impl<W: Word> Drop for Params<W> {
    fn drop(&mut self) {
        self.key.as_mut().zeroize();
    }
}

impl<W: Word> core::fmt::Debug for Params<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Params")
            .field("variant", &W::NAME)
            .field("digest_length", &self.digest_length)
            .field("key_length", &self.key_length)
            .field("fanout", &self.fanout)
            .field("max_depth", &self.max_depth)
            .field("max_leaf_length", &self.max_leaf_length)
            .field("node_offset", &self.node_offset)
            .field("xof_length", &self.xof_length)
            .field("node_depth", &self.node_depth)
            .field("inner_hash_length", &self.inner_hash_length)
            .field("last_node", &self.last_node)
            .finish_non_exhaustive()
    }
}

#[inline]
fn padded(bytes: &[u8]) -> [u8; FIELD_BYTES] {
    let mut out = [0u8; FIELD_BYTES];
    out[..bytes.len()].copy_from_slice(bytes);
    out
}
