pub fn take_comment(raw: &[u8]) -> usize {
    if !matches!(raw.first(), Some(b'#')) { return 0 }

    let mut pos: usize = 1;

    loop {
        match raw.get(pos) {
            Some(b'\n') | None => break,
            Some(_) => pos += 1,
        }
    }

    pos
}

pub fn take_ignorable(raw: &[u8]) -> &[u8] {
    let mut pos: usize = 0;

    loop {
        match raw.get(pos) {
            Some(b'#') => pos += take_comment(&raw[pos..]),
            Some(b' ' | b'\t' | b'\r' | b'\n') => pos += 1,
            _ => return &raw[pos..]
        }
    }
}

pub const fn take(ident: &[u8]) -> impl FnOnce(&[u8]) -> Option<&[u8]> + '_ {
    move |data: &[u8]| {
        if data.len() >= ident.len() && &data[..ident.len()] == ident {
            Some(&data[ident.len()..])
        } else {
            None
        }
    }
}

#[inline]
pub fn take_until_break(raw: &[u8]) -> (&[u8], &[u8]) {
    let mut pos: usize = 0;

    loop {
        match raw.get(pos) {
            Some(b'\n' | b'\r') => return (&raw[..pos], &raw[pos + 1..]),
            Some(_) => pos += 1,
            // eof
            None => return (raw, &[])
        }
    }
}

/// Parses `ident:<whitespace>value`, the value running to the end of the line. Empty values are
/// allowed (the empty message).
#[inline]
pub const fn parse_field(ident: &[u8]) -> impl FnOnce(&[u8]) -> Option<(&[u8], &[u8])> + '_ {
    let take_fn = take(ident);

    move |data: &[u8]| {
        take_fn(data)
            .and_then(take(b":"))
            .map(|rem| {
                let mut pos = 0;
                while matches!(rem.get(pos), Some(b' ' | b'\t')) { pos += 1; }
                take_until_break(&rem[pos..])
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields() {
        let (val, rem) = parse_field(b"in")(b"in:\t0011\nkey:\t22\n").unwrap();
        assert_eq!(val, b"0011");

        let (val, rem) = parse_field(b"key")(rem).unwrap();
        assert_eq!(val, b"22");
        assert!(rem.is_empty());

        let (val, _) = parse_field(b"in")(b"in:\t\nkey:\t").unwrap();
        assert!(val.is_empty());

        assert!(parse_field(b"hash")(b"in:\t00").is_none());
    }

    #[test]
    fn ignorable() {
        assert_eq!(take_ignorable(b"# comment\n\n  in:"), b"in:");
        assert_eq!(take_ignorable(b"# only a comment"), b"");
    }
}
