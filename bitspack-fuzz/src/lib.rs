//! Fuzzing placeholder for bitspack-core decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

pub fn fuzz_decode(data: &[u8]) {
    use bitspack_core::decode_transmission;

    // Try to decode - should never panic
    if let Ok(input) = core::str::from_utf8(data) {
        let _ = decode_transmission(input);
    }
}

pub fn fuzz_analyze(data: &[u8]) {
    use bitspack_core::analyze_transmission;

    // Try to analyze - should never panic
    if let Ok(input) = core::str::from_utf8(data) {
        let _ = analyze_transmission(input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_decode_valid_hex() {
        fuzz_decode(b"D2FE28");
    }

    #[test]
    fn test_fuzz_analyze_non_utf8() {
        fuzz_analyze(&[0xFF; 1024]);
    }
}
