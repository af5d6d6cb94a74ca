//! Opaque Error Handling
//!
//! This module provides a simple, opaque error type (`Res`) which only records whether an
//! operation succeeded, without revealing specific error details. The fixed-size hashers report
//! the outcome of updates and finalization through it.
use crate::error::Unspecified;

/// An opaque result type for error handling without exposing error details.
///
/// This type only indicates success or failure.
#[must_use = "You must handle the potential error"]
#[repr(transparent)]
pub struct Res(bool);

impl Res {
    /// Represents a successful result.
    pub const OK: Self = Self(true);
    /// Represents an error result.
    pub const ERR: Self = Self(false);

    /// Checks if the result is OK (successful).
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.0
    }

    /// Checks if the result is an error.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.0
    }

    /// Converts the `Res` into a `Result<OK, Unspecified>`.
    ///
    /// # Arguments
    ///
    /// * `ok` - The value to return in the `Ok` variant if the `Res` is OK.
    ///
    /// # Returns
    ///
    /// `Ok(ok)` if the `Res` is OK, `Err(Unspecified)` otherwise.
    #[allow(clippy::missing_errors_doc)]
    #[inline(always)]
    pub fn unit_err<OK>(self, ok: OK) -> Result<OK, Unspecified> {
        if self.is_ok() {
            Ok(ok)
        } else {
            Err(Unspecified)
        }
    }
}

impl<T, E> From<Result<T, E>> for Res {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        Self(value.is_ok())
    }
}
