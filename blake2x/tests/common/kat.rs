use crate::common::parse::{take_ignorable, parse_field};

/// One entry of a BLAKE2 known answer file.
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    pub input: Vec<u8>,
    pub key: Vec<u8>,
    pub hash: Vec<u8>
}

/// Known answer tests in the `in:` / `key:` / `hash:` format of the BLAKE2 reference KATs.
#[repr(transparent)]
pub struct KnownTest<'t> {
    inner: &'t [u8]
}

impl<'t> KnownTest<'t> {
    pub fn new(raw: &'t [u8]) -> Self {
        Self { inner: take_ignorable(raw) }
    }

    fn parse_item(&self) -> Option<((&'t [u8], &'t [u8], &'t [u8]), &'t [u8])> {
        let rem = take_ignorable(self.inner);

        if rem.is_empty() {
            return None
        }

        let (input, rem) = parse_field(b"in")(rem)
            .expect("[PARSE] Expected an `in` field.");
        let (key, rem) = parse_field(b"key")(take_ignorable(rem))
            .expect("[PARSE] Expected a `key` field.");
        let (hash, rem) = parse_field(b"hash")(take_ignorable(rem))
            .expect("[PARSE] Missing the expected output (`hash` field).");

        Some(((input, key, hash), rem))
    }
}

impl<'t> Iterator for KnownTest<'t> {
    type Item = KnownAnswer;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_item().map(|((input, key, hash), rem)| {
            self.inner = rem;

            KnownAnswer {
                input: hex::decode(input)
                    .expect("[PARSE] Input (`in`) was not properly hex encoded."),
                key: hex::decode(key)
                    .expect("[PARSE] Key (`key`) was not properly hex encoded."),
                hash: hex::decode(hash)
                    .expect("[PARSE] Expected output (`hash`) was not properly hex encoded.")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries() {
        let raw = b"# header\n\nin:\t\nkey:\t00ff\nhash:\tabcd\n\nin:\t01\nkey:\t\nhash:\t02\n";
        let items: Vec<_> = KnownTest::new(raw).collect();

        assert_eq!(items.len(), 2);
        assert!(items[0].input.is_empty());
        assert_eq!(items[0].key, [0x00, 0xff]);
        assert_eq!(items[0].hash, [0xab, 0xcd]);
        assert_eq!(items[1].input, [0x01]);
        assert!(items[1].key.is_empty());
    }
}
