use core::fmt;

/// A generic error type representing an unspecified failure in cryptographic operations.
///
/// In cryptographic contexts, it is often necessary to hide the specific reason for
/// an operation's failure to prevent leaking sensitive information to potential attackers.
/// `Unspecified` serves this purpose by providing a simple, non-descriptive error type
/// that can be used in situations where the cause of the failure should not be exposed.
///
/// The fixed-size hashers ([`Blake2b`], [`Blake2s`]) report failures with this type, any
/// [`Error`] can be made opaque through its `From` implementation.
///
/// [`Blake2b`]: crate::Blake2b
/// [`Blake2s`]: crate::Blake2s
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unspecified;

impl fmt::Display for Unspecified {
    /// Writes "Unspecified" to the formatter.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Unspecified")
    }
}

std! { impl std::error::Error for Unspecified {} }

/// Errors raised while configuring or driving a BLAKE2 instance.
///
/// None of these depend on the data being hashed. Configuration errors are raised when a
/// parameter is set, before any engine exists, and sequencing errors when an engine is used
/// after it has been finalized. Neither can be recovered from; the instance must be discarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The key exceeds the variant's maximum (`64` bytes for BLAKE2b, `32` for BLAKE2s).
    KeyLength,
    /// The salt exceeds the variant's maximum (`16` bytes for BLAKE2b, `8` for BLAKE2s).
    SaltLength,
    /// The personalization exceeds the variant's maximum (`16` / `8` bytes).
    PersonalLength,
    /// The requested digest length exceeds the variant's maximum (`64` / `32` bytes).
    DigestLength,
    /// The inner hash length exceeds the variant's maximum digest length.
    InnerLength,
    /// The node offset does not fit in the parameter block's node offset field.
    NodeOffset,
    /// The requested BLAKE2X output length cannot be encoded in the XOF length field.
    OutputLength,
    /// The variant tag was neither `2b` nor `2s`.
    Variant,
    /// The engine was already finalized.
    Finalized,
    /// The output buffer is smaller than the digest.
    OutputSize,
    /// A BLAKE2X reader was asked for bytes past its declared output length.
    OutputExhausted,
}

impl Error {
    /// Returns `true` for errors raised while building parameters.
    #[inline]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::KeyLength | Self::SaltLength | Self::PersonalLength | Self::DigestLength
                | Self::InnerLength | Self::NodeOffset | Self::OutputLength | Self::Variant
        )
    }

    const fn as_str(&self) -> &'static str {
        match self {
            Self::KeyLength => "key length exceeds the maximum for this variant",
            Self::SaltLength => "salt length exceeds the maximum for this variant",
            Self::PersonalLength => "personalization length exceeds the maximum for this variant",
            Self::DigestLength => "digest length exceeds the maximum for this variant",
            Self::InnerLength => "inner hash length exceeds the maximum for this variant",
            Self::NodeOffset => "node offset does not fit the parameter block",
            Self::OutputLength => "output length cannot be encoded in the XOF length field",
            Self::Variant => "unsupported BLAKE2 variant",
            Self::Finalized => "hash state was already finalized",
            Self::OutputSize => "output buffer is smaller than the digest",
            Self::OutputExhausted => "requested output exceeds the declared XOF length",
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Error> for Unspecified {
    #[inline]
    fn from(_value: Error) -> Self {
        Self
    }
}

std! { impl std::error::Error for Error {} }

io_impls! {
    impl embedded_io::Error for Error {
        #[inline]
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }
}

/// Erase the reason for a failure, leaving only that it occurred.
pub trait MakeOpaque<T> {
    /// Map the error to [`Unspecified`].
    ///
    /// # Errors
    ///
    /// If `self` was an error.
    fn opaque(self) -> Result<T, Unspecified>;
}

impl<T, E> MakeOpaque<T> for Result<T, E> where E: Into<Unspecified> {
    #[inline]
    fn opaque(self) -> Result<T, Unspecified> {
        self.map_err(Into::into)
    }
}
