//! The Streaming Engine
//!
//! [`State`] owns the chain value, the byte counter, the finalization flags and a one-block
//! lookahead buffer. A full block is only compressed once more input arrives, so the engine
//! always knows at compression time whether the block is the last one.
use crate::compress::compress;
use crate::digest::Digest;
use crate::error::Error;
use crate::params::Params;
use crate::word::Word;
use zeroize::Zeroize;

/// An incremental BLAKE2 hash state.
///
/// # Example
///
/// ```
/// use blake2x::{Blake2bParams, blake2b};
///
/// # fn main() -> Result<(), blake2x::Error> {
/// let mut state = Blake2bParams::new().to_state();
/// state.update(b"hello ")?;
/// state.update(b"world")?;
///
/// let digest = state.finalize()?;
/// assert_eq!(digest, blake2b(b"hello world"));
///
/// // The state is spent.
/// assert!(state.update(b"!").is_err());
/// # Ok(()) }
/// ```
pub struct State<W: Word> {
    h: [W; 8],
    t: [W; 2],
    f: [W; 2],
    buf: W::Block,
    buflen: usize,
    digest_length: u8,
    last_node: bool,
    finalized: bool,
}

/// An incremental BLAKE2b state.
pub type Blake2bState = State<u64>;
/// An incremental BLAKE2s state.
pub type Blake2sState = State<u32>;

impl<W: Word> State<W> {
    /// Create a state from `params`, absorbing the key block if a key was set.
    pub fn new(params: &Params<W>) -> Self {
        let mut state = Self {
            h: params.to_words(),
            t: [W::ZERO; 2],
            f: [W::ZERO; 2],
            buf: W::ZERO_BLOCK,
            buflen: 0,
            digest_length: params.digest_length,
            last_node: params.last_node,
            finalized: false,
        };

        if params.key_length > 0 {
            state.absorb(params.key.as_ref());
        }

        state
    }

    #[inline(always)]
    fn compress_block(&mut self, block: &[u8]) {
        W::counter_add(&mut self.t, W::BLOCK_BYTES);
        compress(&mut self.h, &W::load_block(block), &self.t, &self.f);
    }

    #[inline]
    fn compress_buffered(&mut self) {
        let block = self.buf;
        self.compress_block(block.as_ref());
        self.buflen = 0;
    }

    /// Absorb input without checking whether the state was finalized.
    pub(crate) fn absorb(&mut self, mut input: &[u8]) {
        let fill = W::BLOCK_BYTES - self.buflen;

        if input.len() > fill {
            let (head, rest) = input.split_at(fill);
            self.buf.as_mut()[self.buflen..].copy_from_slice(head);
            self.compress_buffered();
            input = rest;

            // keep at least one byte back, the final block is only known at finalization
            while input.len() > W::BLOCK_BYTES {
                let (block, rest) = input.split_at(W::BLOCK_BYTES);
                self.compress_block(block);
                input = rest;
            }
        }

        self.buf.as_mut()[self.buflen..self.buflen + input.len()].copy_from_slice(input);
        self.buflen += input.len();
    }

    /// Update the state with `input`.
    ///
    /// # Errors
    ///
    /// [`Error::Finalized`] if the state was already finalized.
    #[inline]
    pub fn update(&mut self, input: &[u8]) -> Result<(), Error> {
        if self.finalized { return Err(Error::Finalized) }
        self.absorb(input);
        Ok(())
    }

    /// Compress the final block and write the full chain value into `out`.
    fn finish(&mut self, out: &mut [u8; 64]) {
        W::counter_add(&mut self.t, self.buflen);
        self.f[0] = W::MAX;
        if self.last_node {
            self.f[1] = W::MAX;
        }

        self.buf.as_mut()[self.buflen..].fill(0);
        let block = self.buf;
        compress(&mut self.h, &W::load_block(block.as_ref()), &self.t, &self.f);
        self.finalized = true;

        for (chunk, word) in out.chunks_exact_mut(W::BYTES).zip(self.h.iter()) {
            word.write_le(chunk);
        }
    }

    /// Finalize a fresh state, for one-shot use within the crate.
    pub(crate) fn finalize_digest(&mut self) -> Digest {
        debug_assert!(!self.finalized);
        let mut full = [0u8; 64];
        self.finish(&mut full);
        let digest = Digest::new(&full, self.digest_length());
        full.zeroize();
        digest
    }

    /// Finalize the state, writing the digest into the front of `out`.
    ///
    /// # Returns
    ///
    /// The number of bytes written, the digest length.
    ///
    /// # Errors
    ///
    /// - [`Error::Finalized`] if the state was already finalized.
    /// - [`Error::OutputSize`] if `out` is shorter than the digest, the state is left untouched.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, Error> {
        if self.finalized { return Err(Error::Finalized) }
        let len = self.digest_length();
        if out.len() < len { return Err(Error::OutputSize) }

        let mut full = [0u8; 64];
        self.finish(&mut full);
        out[..len].copy_from_slice(&full[..len]);
        full.zeroize();

        Ok(len)
    }

    /// Finalize the state, returning the digest.
    ///
    /// # Errors
    ///
    /// [`Error::Finalized`] if the state was already finalized.
    #[inline]
    pub fn finalize(&mut self) -> Result<Digest, Error> {
        if self.finalized { return Err(Error::Finalized) }
        Ok(self.finalize_digest())
    }

    /// The number of bytes covered by compressions so far, including the key block.
    ///
    /// Up to one block of input is held back until more input arrives or the state is
    /// finalized, after finalization this is the total input length.
    #[inline]
    pub fn counter(&self) -> u128 {
        W::counter_value(&self.t)
    }

    /// Set or clear the last-node flag ahead of finalization.
    #[inline]
    pub fn set_last_node(&mut self, last: bool) -> &mut Self {
        self.last_node = last;
        self
    }

    /// The digest length in bytes.
    #[inline]
    pub const fn digest_length(&self) -> usize {
        self.digest_length as usize
    }

    /// Returns `true` once the state has been finalized.
    #[inline]
    pub const fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl<W: Word> Clone for State<W> {
    fn clone(&self) -> Self {
        Self {
            h: self.h,
            t: self.t,
            f: self.f,
            buf: self.buf,
            buflen: self.buflen,
            digest_length: self.digest_length,
            last_node: self.last_node,
            finalized: self.finalized,
        }
    }
}

impl<W: Word> Drop for State<W> {
    fn drop(&mut self) {
        self.h.zeroize();
        self.buf.as_mut().zeroize();
    }
}

impl<W: Word> core::fmt::Debug for State<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("State")
            .field("variant", &W::NAME)
            .field("counter", &self.counter())
            .field("digest_length", &self.digest_length)
            .field("last_node", &self.last_node)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

std! {
    use std::io as std_io;

    impl<W: Word> std_io::Write for State<W> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> std_io::Result<usize> {
            self.update(buf).map(|()| buf.len()).map_err(std_io::Error::other)
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> std_io::Result<()> {
            self.update(buf).map_err(std_io::Error::other)
        }

        #[inline]
        fn flush(&mut self) -> std_io::Result<()> {
            Ok(())
        }
    }
}

io_impls! {
    use embedded_io::{self as eio, ErrorType};

    impl<W: Word> ErrorType for State<W> {
        type Error = Error;
    }

    impl<W: Word> eio::Write for State<W> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.update(buf).map(|()| buf.len())
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::params::{Blake2bParams, Blake2sParams};
    use crate::test_utils::{AnyList, BoundList};
    use digest::{Mac, Update, VariableOutput};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(5_000))]

        #[test]
        fn blake2b_var_eq_rust_crypto(input in any::<BoundList<1024>>(), len in 1..=64usize) {
            let mut params = Blake2bParams::new();
            params.digest_length(len).unwrap();

            let mut rc = blake2::Blake2bVar::new(len).unwrap();
            rc.update(input.as_slice());
            let mut expected = [0u8; 64];
            rc.finalize_variable(&mut expected[..len]).unwrap();

            prop_assert_eq!(params.hash(input.as_slice()), &expected[..len]);
        }

        #[test]
        fn blake2s_var_eq_rust_crypto(input in any::<BoundList<1024>>(), len in 1..=32usize) {
            let mut params = Blake2sParams::new();
            params.digest_length(len).unwrap();

            let mut rc = blake2::Blake2sVar::new(len).unwrap();
            rc.update(input.as_slice());
            let mut expected = [0u8; 32];
            rc.finalize_variable(&mut expected[..len]).unwrap();

            prop_assert_eq!(params.hash(input.as_slice()), &expected[..len]);
        }

        #[test]
        fn keyed_salted_eq_rust_crypto(
            input in any::<BoundList<512>>(),
            key in any::<BoundList<64>>(),
            salt in any::<BoundList<16>>(),
            personal in any::<BoundList<16>>()
        ) {
            prop_assume!(!key.is_empty());

            let mut params = Blake2bParams::new();
            params
                .key(key.as_slice()).unwrap()
                .salt(salt.as_slice()).unwrap()
                .personal(personal.as_slice()).unwrap();

            let mut rc = blake2::Blake2bMac512::new_with_salt_and_personal(
                key.as_slice(), salt.as_slice(), personal.as_slice()
            ).unwrap();
            Mac::update(&mut rc, input.as_slice());
            let expected = rc.finalize().into_bytes();

            prop_assert_eq!(params.hash(input.as_slice()), expected.as_slice());
        }

        #[test]
        fn arbitrary_chunking(inputs in any::<AnyList<16, BoundList<200>>>()) {
            let mut b = Blake2bParams::new().to_state();
            let mut s = Blake2sParams::new().to_state();

            for input in inputs.as_slice() {
                b.update(input.as_slice()).unwrap();
                s.update(input.as_slice()).unwrap();
            }

            let joined = inputs.join();
            prop_assert_eq!(b.finalize().unwrap(), Blake2bParams::new().hash(&joined));
            prop_assert_eq!(s.finalize().unwrap(), Blake2sParams::new().hash(&joined));
            prop_assert_eq!(b.counter(), joined.len() as u128);
        }
    }
}
