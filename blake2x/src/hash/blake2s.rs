blake_api! {
    name: Blake2s,
    word: u32,
    max: 32,
    mac: Blake2sMac,
    test_sizes: [32 => U32, 28 => U28, 24 => U24, 20 => U20, 16 => U16, 12 => U12, 4 => U4, 1 => U1]
}
