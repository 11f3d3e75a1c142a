//! Fuzzing placeholder for the creasepack-core decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

/// Decode every 4-byte window of `data` as an alpha value
pub fn fuzz_decode(data: &[u8]) {
    use creasepack_core::decode_alpha;
    use creasepack_core::types::EncodedAlpha;

    // Try to decode - should never panic, whatever the bit pattern
    for chunk in data.chunks_exact(4) {
        let alpha = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let _ = decode_alpha(EncodedAlpha::from_raw(alpha));
    }
}

/// Sweep and migrate `data` reinterpreted as an alpha channel
pub fn fuzz_channel(data: &[u8]) {
    use creasepack_core::channel::{migrate_channel, sweep_channel};

    let channel: Vec<f32> = data
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    // Neither pass should ever panic
    let _ = sweep_channel(&channel);
    let _ = migrate_channel(&channel);
}
