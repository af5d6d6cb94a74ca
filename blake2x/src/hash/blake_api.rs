macro_rules! blake_api {
    (
        name: $name:ident,
        word: $word:ty,
        // applies to both key and the digest length
        max: $max:literal,
        mac: $mac:ident,
        test_sizes: [$($sz:literal => $rsz:ident),* $(,)?] $(,)?
    ) => {
        #[doc = concat!("The `", stringify!($name), "` hasher.")]
        #[doc = ""]
        #[doc = concat!(
            "A streaming ", stringify!($name), " instance with a digest length fixed at compile ",
            "time. Failures are reported opaquely, through [`Res`] for updates and "
        )]
        #[doc = "[`Unspecified`] for construction and finalization."]
        #[doc = ""]
        #[doc = "# Const Generic"]
        #[doc = ""]
        #[doc = concat!(
            "* `C` - The length of the ", stringify!($name),
            " digest to implement, with a maximum length of `", stringify!($max), "`."
        )]
        #[doc = ""]
        #[doc = "# Example"]
        #[doc = ""]
        #[doc = "```"]
        #[doc = concat!("use blake2x::hash::", stringify!($name), ";")]
        #[doc = ""]
        #[doc = concat!(
            "let mut hasher = ", stringify!($name), "::<", stringify!($max), ">::new().unwrap();"
        )]
        #[doc = ""]
        #[doc = "let input = b\"hello world\";"]
        #[doc = "assert!(hasher.try_update(input.as_slice()).is_ok());"]
        #[doc = ""]
        #[doc = "let finalized = hasher.try_finalize().unwrap();"]
        #[doc = "assert_ne!(finalized.as_slice(), input.as_slice());"]
        #[doc = concat!("assert_eq!(finalized.len(), ", stringify!($max), ");")]
        #[doc = "```"]
        #[doc = ""]
        #[doc = "[`Res`]: crate::opaque_res::Res"]
        #[doc = "[`Unspecified`]: crate::Unspecified"]
        #[derive(Clone, Debug)]
        pub struct $name<const C: usize = $max> {
            inner: $crate::state::State<$word>
        }

        impl<const C: usize> $name<C> {
            #[inline]
            fn with_key(key: &[u8]) -> Result<Self, $crate::error::Unspecified> {
                if !$crate::const_lte::<C, { $max }>() { return Err($crate::error::Unspecified) }

                let mut params = $crate::params::Params::<$word>::new();
                params.digest_length(C)?.key(key)?;

                event!(trace, variant = stringify!($name), digest_len = C, "new hasher");
                Ok(Self { inner: params.to_state() })
            }

            #[doc = concat!("Create a new `", stringify!($name), "` instance.")]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = concat!(
                "If the digest length is greater than `", stringify!($max), "` (const generic `C`)"
            )]
            #[doc = ""]
            #[doc = "# Example"]
            #[doc = ""]
            #[doc = "```"]
            #[doc = concat!("use blake2x::hash::", stringify!($name), ";")]
            #[doc = ""]
            #[doc = concat!(
                "let mut hasher = ", stringify!($name), "::<", stringify!($max), ">::new().unwrap();"
            )]
            #[doc = ""]
            #[doc = "let input = b\"hello world\";"]
            #[doc = "assert!(hasher.try_update(input.as_slice()).is_ok());"]
            #[doc = ""]
            #[doc = "let finalized = hasher.try_finalize().unwrap();"]
            #[doc = concat!("assert_eq!(finalized.len(), ", stringify!($max), ");")]
            #[doc = ""]
            #[doc = concat!("// Maximum `C` is ", stringify!($max))]
            #[doc = concat!(
                "assert!(", stringify!($name), "::<{", stringify!($max * 2), "}>::new().is_err());"
            )]
            #[doc = "```"]
            #[inline]
            pub fn new() -> Result<Self, $crate::error::Unspecified> {
                Self::with_key(&[])
            }

            #[doc = concat!("Create a new `", stringify!($name), "` instance using a key.")]
            #[doc = ""]
            #[doc = concat!(
                "The key is used to create a keyed ", stringify!($name), " instance, ",
                "which is suitable for"
            )]
            #[doc = "message authentication (MAC) purposes. An empty key is the same as no key."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = concat!("- If the digest length `C` is greater than `", stringify!($max), "`.")]
            #[doc = concat!("- If the key length exceeds `", stringify!($max), "` bytes.")]
            #[doc = ""]
            #[doc = "# Example"]
            #[doc = ""]
            #[doc = "```"]
            #[doc = concat!("use blake2x::hash::", stringify!($name), ";")]
            #[doc = ""]
            #[doc = "let key = b\"my-secret-key\";"]
            #[doc = concat!(
                "let mut hasher = ", stringify!($name), "::<", stringify!($max),
                ">::new_with_key(key).unwrap();"
            )]
            #[doc = ""]
            #[doc = "let input = b\"hello world\";"]
            #[doc = "assert!(hasher.try_update(input.as_slice()).is_ok());"]
            #[doc = ""]
            #[doc = "let finalized = hasher.try_finalize().unwrap();"]
            #[doc = concat!("assert_eq!(finalized.len(), ", stringify!($max), ");")]
            #[doc = ""]
            #[doc = concat!("let long_key = [0u8; ", stringify!($max + 1), "];")]
            #[doc = concat!(
                "assert!(", stringify!($name), "::<", stringify!($max),
                ">::new_with_key(&long_key).is_err());"
            )]
            #[doc = "```"]
            #[inline]
            pub fn new_with_key(key: &[u8]) -> Result<Self, $crate::error::Unspecified> {
                Self::with_key(key)
            }

            #[doc = concat!("Create a new `", stringify!($name), "` instance using a fixed-size key.")]
            #[doc = ""]
            #[doc = "Similar to [`new_with_key`], with the key length checked against the const"]
            #[doc = "generic `K` rather than at runtime."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = concat!("- If the digest length `C` is greater than `", stringify!($max), "`.")]
            #[doc = concat!("- If `K` exceeds `", stringify!($max), "` bytes.")]
            #[doc = ""]
            #[doc = "# Example"]
            #[doc = ""]
            #[doc = "```"]
            #[doc = concat!("use blake2x::hash::", stringify!($name), ";")]
            #[doc = ""]
            #[doc = "let key: [u8; 16] = [0x00; 16];"]
            #[doc = concat!(
                "let mut hasher = ", stringify!($name), "::<", stringify!($max),
                ">::new_with_sized_key(&key).unwrap();"
            )]
            #[doc = ""]
            #[doc = "assert!(hasher.update_sized(b\"some data\").is_ok());"]
            #[doc = concat!("assert_eq!(hasher.try_finalize().unwrap().len(), ", stringify!($max), ");")]
            #[doc = ""]
            #[doc = concat!("let oversized_key = [0u8; ", stringify!($max * 2), "];")]
            #[doc = concat!(
                "assert!(", stringify!($name), "::<", stringify!($max),
                ">::new_with_sized_key(&oversized_key).is_err());"
            )]
            #[doc = "```"]
            #[doc = "[`new_with_key`]: Self::new_with_key"]
            #[inline]
            pub fn new_with_sized_key<const K: usize>(
                key: &[u8; K]
            ) -> Result<Self, $crate::error::Unspecified> {
                if !$crate::const_lte::<K, { $max }>() { return Err($crate::error::Unspecified) }
                Self::with_key(key)
            }

            #[doc = concat!("Update the `", stringify!($name), "` instance with the provided data.")]
            #[doc = ""]
            #[doc = "# Arguments"]
            #[doc = ""]
            #[doc = "* `data` - The slice to update the underlying hasher state with."]
            #[doc = ""]
            #[doc = "# Returns"]
            #[doc = ""]
            #[doc = "This function returns the result of the operation, an update of a live hasher"]
            #[doc = "cannot fail."]
            #[inline]
            pub fn try_update(&mut self, data: &[u8]) -> $crate::opaque_res::Res {
                $crate::opaque_res::Res::from(self.inner.update(data))
            }

            #[doc = concat!(
                "Update the `", stringify!($name),
                "` instance with data whose size is known at compile time."
            )]
            #[doc = ""]
            #[doc = "# Example"]
            #[doc = ""]
            #[doc = "```"]
            #[doc = concat!("use blake2x::hash::", stringify!($name), ";")]
            #[doc = ""]
            #[doc = concat!("let mut hasher = ", stringify!($name), "::<", stringify!($max), ">::new().unwrap();")]
            #[doc = ""]
            #[doc = "let input = b\"hello world\";"]
            #[doc = "assert!(hasher.update_sized(&input).is_ok());"]
            #[doc = "```"]
            #[inline]
            pub fn update_sized<const OC: usize>(&mut self, data: &[u8; OC]) -> $crate::opaque_res::Res {
                self.try_update(data)
            }

            panic_api! {
            #[doc = concat!("Update the `", stringify!($name), "` instance with the provided data, panicking on failure.")]
            #[doc = ""]
            #[doc = "# Panics"]
            #[doc = ""]
            #[doc = "If the underlying state rejects the update."]
            #[doc = ""]
            #[doc = "If a panic is not acceptable for your use case, consider using [`try_update`] instead."]
            #[doc = ""]
            #[doc = "[`try_update`]: Self::try_update"]
            #[track_caller]
            pub fn update(&mut self, data: &[u8]) {
                self.try_update(data).unit_err(())
                    .expect(concat!("Failed to update hash in `", stringify!($name), "`"));
            }
            }

            #[doc = concat!(
                "Finalize the `", stringify!($name),
                "` hashing process, writing the output to the provided buffer."
            )]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "If the size of `output` is less than `C` (the size of the digest)."]
            #[doc = ""]
            #[doc = "# Example"]
            #[doc = ""]
            #[doc = "```"]
            #[doc = concat!("use blake2x::hash::", stringify!($name), ";")]
            #[doc = concat!("let hasher = ", stringify!($name), "::<", stringify!($max), ">::new().unwrap();")]
            #[doc = ""]
            #[doc = concat!("let mut output = [0u8; ", stringify!($max), "];")]
            #[doc = "assert!(hasher.finalize_into(&mut output).is_ok());"]
            #[doc = "```"]
            #[inline]
            pub fn finalize_into(mut self, output: &mut [u8]) -> $crate::opaque_res::Res {
                if !$crate::gte::<{ C }>(output.len()) { return $crate::opaque_res::Res::ERR }
                $crate::opaque_res::Res::from(self.inner.finalize_into(output))
            }

            #[doc = concat!(
                "Finalize the `", stringify!($name),
                "` hashing process, writing the output to a fixed-size buffer."
            )]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "If the length of `output` is less than `C` (the size of the digest)."]
            #[inline]
            pub fn finalize_into_sized<const OC: usize>(self, output: &mut [u8; OC]) -> $crate::opaque_res::Res {
                if !$crate::const_gte::<{ OC }, { C }>() { return $crate::opaque_res::Res::ERR }
                self.finalize_into(output)
            }

            #[doc = concat!(
                "Finalize the `", stringify!($name),
                "` hashing process, writing the output to a buffer with an exact size."
            )]
            #[doc = ""]
            #[doc = "**Note**: If the size of the output buffer is not exactly `C`, see [`finalize_into`] for"]
            #[doc = "greater flexibility, or [`finalize_into_sized`] if the size is known at compile time but is"]
            #[doc = "not exactly `C`."]
            #[doc = ""]
            #[doc = "[`finalize_into`]: Self::finalize_into"]
            #[doc = "[`finalize_into_sized`]: Self::finalize_into_sized"]
            #[inline]
            pub fn finalize_into_exact(self, output: &mut [u8; C]) -> $crate::opaque_res::Res {
                self.finalize_into(output)
            }

            #[doc = concat!(
                "Finalize the `", stringify!($name), "` hashing process, returning the result as an array."
            )]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "If the underlying state could not be finalized."]
            #[doc = ""]
            #[doc = "# Example"]
            #[doc = ""]
            #[doc = "```"]
            #[doc = concat!("use blake2x::hash::", stringify!($name), ";")]
            #[doc = concat!(
                "let hasher = ", stringify!($name), "::<16>::new().unwrap();"
            )]
            #[doc = ""]
            #[doc = "let res = hasher.try_finalize().unwrap();"]
            #[doc = "assert_eq!(res.len(), 16);"]
            #[doc = "```"]
            #[inline]
            pub fn try_finalize(self) -> Result<[u8; C], $crate::error::Unspecified> {
                let mut buf = [0u8; C];
                self.finalize_into_exact(&mut buf).unit_err(buf)
            }

            panic_api! {
            #[doc = concat!(
                "Finalize the `", stringify!($name),
                "` hashing process, returning the result as an array, panicking on failure."
            )]
            #[doc = ""]
            #[doc = "# Panics"]
            #[doc = ""]
            #[doc = "If the underlying state could not be finalized."]
            #[doc = ""]
            #[doc = "If panicking is not acceptable for your use case, consider using [`try_finalize`] instead."]
            #[doc = ""]
            #[doc = "[`try_finalize`]: Self::try_finalize"]
            #[track_caller]
            pub fn finalize(self) -> [u8; C] {
                self.try_finalize()
                    .expect(concat!("Failed to finalize in `", stringify!($name), "`"))
            }
            }
        }

        #[cfg(test)]
        mod unit_tests {
            use super::*;
            use digest::Digest;

            #[test]
            fn rust_crypto_equivalence() {
                many_blake!($name, [$($sz => $rsz),*] => |mut ours, mut rc| {
                    let input = b"hello world";

                    assert!(ours.try_update(input.as_slice()).is_ok());
                    rc.update(input.as_slice());

                    let o_out  = ours.try_finalize().unwrap();
                    let rc_out = rc.finalize();

                    assert_eq!(o_out.as_slice(), rc_out.as_slice());
                });
            }

            #[test]
            fn rust_crypto_partial_update_equivalence() {
                many_blake!($name, [$($sz => $rsz),*] => |mut ours, mut rc| {
                    let input = b"hello w";

                    assert!(ours.try_update(input.as_slice()).is_ok());
                    rc.update(input.as_slice());

                    let f = b"orld";

                    assert!(ours.try_update(f.as_slice()).is_ok());
                    rc.update(f.as_slice());

                    let o_out  = ours.try_finalize().unwrap();
                    let rc_out = rc.finalize();

                    assert_eq!(o_out.as_slice(), rc_out.as_slice());
                });
            }

            #[test]
            fn rust_crypto_empty_equivalence() {
                many_blake!($name, [$($sz => $rsz),*] => |mut ours, mut rc| {
                    assert!(ours.try_update(b"").is_ok());
                    rc.update(b"");

                    let o_out  = ours.try_finalize().unwrap();
                    let rc_out = rc.finalize();

                    assert_eq!(o_out.as_slice(), rc_out.as_slice());
                })
            }

            #[test]
            fn rust_crypto_1mb_equivalence() {
                let input = vec![7u8; 1_000_000];

                many_blake!($name, [$($sz => $rsz),*] => |mut ours, mut rc| {
                    assert!(ours.try_update(input.as_slice()).is_ok());
                    rc.update(input.as_slice());

                    let o_out  = ours.try_finalize().unwrap();
                    let rc_out = rc.finalize();

                    assert_eq!(o_out.as_slice(), rc_out.as_slice());
                })
            }

            #[test]
            fn rust_crypto_keyed_equivalence() {
                use digest::{KeyInit, Mac};

                let key: [u8; $max] = core::array::from_fn(|i| i as u8);
                let mut ours = $name::<{ $max }>::new_with_sized_key(&key).unwrap();
                let mut rc = <blake2::$mac<::digest::consts::U32> as KeyInit>::new_from_slice(&key)
                    .unwrap();

                assert!(ours.try_update(b"keyed input").is_ok());
                Mac::update(&mut rc, b"keyed input");

                let mut short = $name::<32>::new_with_key(&key).unwrap();
                assert!(short.try_update(b"keyed input").is_ok());

                assert_eq!(
                    short.try_finalize().unwrap().as_slice(),
                    rc.finalize().into_bytes().as_slice()
                );
                assert_eq!(ours.try_finalize().unwrap().len(), $max);
            }

            #[test]
            #[cfg(feature = "can-panic")]
            fn panicking_api_matches_fallible() {
                let mut ours = $name::<{ $max }>::new().unwrap();
                ours.update(b"hello ");
                ours.update(b"world");

                let mut fallible = $name::<{ $max }>::new().unwrap();
                assert!(fallible.try_update(b"hello world").is_ok());

                assert_eq!(ours.finalize(), fallible.try_finalize().unwrap());
            }

            #[test]
            fn invalid_lengths() {
                assert!($name::<{ $max + 1 }>::new().is_err());
                assert!($name::<{ $max }>::new_with_key(&[0u8; $max + 1]).is_err());
                assert!($name::<{ $max }>::new_with_sized_key(&[0u8; $max + 1]).is_err());
                assert!($name::<0>::new().is_ok());
            }

            #[test]
            fn finalize_into_sizes() {
                let hasher = $name::<16>::new().unwrap();
                let mut small = [0u8; 15];
                assert!(hasher.clone().finalize_into(&mut small).is_err());
                assert!(hasher.clone().finalize_into_sized(&mut small).is_err());

                let mut large = [0u8; 17];
                assert!(hasher.clone().finalize_into_sized(&mut large).is_ok());
                assert_eq!(large[..16], hasher.try_finalize().unwrap());
                assert_eq!(large[16], 0);
            }
        }

    };
}

#[cfg(test)]
macro_rules! many_blake {
    (
        $blake:ident, [$($sz:literal => $rSz:ident),*] => |mut $ours:ident, mut $rc:ident| $do:expr
    ) => {{
        $({
            let mut $ours = $blake::<{ $sz }>::new().unwrap();
            let mut $rc   = blake2::$blake::<::digest::consts::$rSz>::new();
            $do
        })*
    }};
}
