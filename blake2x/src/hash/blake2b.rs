blake_api! {
    name: Blake2b,
    word: u64,
    max: 64,
    mac: Blake2bMac,
    test_sizes: [64 => U64, 48 => U48, 32 => U32, 28 => U28, 20 => U20, 16 => U16, 9 => U9, 1 => U1]
}
