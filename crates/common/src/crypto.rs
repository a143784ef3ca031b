//! Cryptographic utilities shared across Khabar crates

/// Compare two byte strings without short-circuiting on the first mismatch.
///
/// Inputs of different length compare unequal immediately; only equal-length
/// inputs are folded in constant time.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
