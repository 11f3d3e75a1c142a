//! Alpha encoding

use crate::constants::{ALPHA_SCALE, CHECK_DIGIT_SCALE, ROUNDING_GUARD};
use crate::damm;
use crate::types::{CreaseParams, EncodedAlpha};

/// Encode crease parameters into a vertex-color alpha value
///
/// The value is assembled in decimal places:
/// 1. Packed fields (three digits): lod, mode, bump, thickness
/// 2. Damm check digit over the packed integer (one digit)
/// 3. Rounding guard (one digit, always 1)
///
/// The guard keeps the value clear of the floor threshold when the channel
/// stores it at single precision; decode only floors and never reads it.
///
/// Equal parameters always produce a bit-identical alpha.
pub fn encode_alpha(params: &CreaseParams) -> EncodedAlpha {
    let packed = u64::from(params.packed());
    let scaled = damm::append(packed) * CHECK_DIGIT_SCALE + ROUNDING_GUARD;
    EncodedAlpha::from_raw((scaled as f64 / ALPHA_SCALE) as f32)
}
