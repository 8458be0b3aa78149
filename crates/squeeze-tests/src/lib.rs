//! Shared helpers for squeeze integration tests

#![deny(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

/// Create a file with the given content, returning its path
pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// Deterministic pseudo-random bytes for test payloads
///
/// Uses a fixed multiplicative generator so failures reproduce exactly.
pub fn deterministic_bytes(len: usize) -> Vec<u8> {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (state >> 56) as u8
        })
        .collect()
}
