//! Fixed-Length BLAKE2 Hashers
//!
//! [`Blake2b`] and [`Blake2s`] fix the digest length at compile time and report failures
//! opaquely. For runtime digest lengths, salts, personalization or tree parameters use
//! [`Params`](crate::Params) directly.

#[macro_use]
mod blake_api;

#[doc(hidden)]
pub mod blake2b;
#[doc(hidden)]
pub mod blake2s;

pub use {
    blake2b::Blake2b,
    blake2s::Blake2s
};
