pub mod parse;
pub mod kat;

use std::path::PathBuf;

/// Reads a vector file from `tests/vectors`.
pub fn load_vectors(name: &str) -> Vec<u8> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "vectors", name].iter().collect();
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("[LOAD] Failed to read {}: {e}", path.display()))
}

/// The `n` byte pattern `00 01 02 ..` used as message and key by the reference KATs.
pub fn sequence(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}
