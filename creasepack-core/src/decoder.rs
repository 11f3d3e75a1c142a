//! Checksum-validated alpha decoding

use crate::constants::{FULL_SCALE, PACKED_SCALE};
use crate::damm;
use crate::types::{CreaseParams, EncodedAlpha};

#[cfg(feature = "logging")]
use tracing::trace;

/// Decode a vertex-color alpha value back into crease parameters
///
/// Returns `None` when the value does not carry crease data: an
/// uninitialized channel (typically 1.0, full opacity), a raw opacity
/// value from unrelated tooling, or corruption. That outcome is expected
/// and common. Callers treat it as "this vertex has no crease", never as
/// a failure, and must not write it back as crease metadata.
///
/// Never panics, for any bit pattern of the input.
pub fn decode_alpha(encoded: EncodedAlpha) -> Option<CreaseParams> {
    let alpha = encoded.value();

    // The host clamps channel values to [0, 1]; anything else is foreign.
    // Rejecting it up front keeps the truncations below exact floors.
    if !alpha.is_finite() || alpha < 0.0 {
        return None;
    }

    // Floor applies after scaling, never before. Truncation is floor on
    // the non-negative domain guarded above; the widening to f64 keeps the
    // products exact for every representable channel value.
    let full = (f64::from(alpha) * FULL_SCALE) as u64;
    if !damm::verify(full) {
        #[cfg(feature = "logging")]
        trace!("alpha {} fails checksum, not a crease value", alpha);

        return None;
    }

    let packed = (f64::from(alpha) * PACKED_SCALE) as u16;
    Some(CreaseParams::from_packed(packed))
}
