//! Constants for the crease-alpha packing layout
//!
//! A crease is four small fields packed into 10 bits, carried in the first
//! three decimal places of a vertex-color alpha value, followed by a Damm
//! check digit and a fixed rounding guard:
//!
//! ```text
//! alpha = 0.PPPCG
//!           |||||
//!           ||||+-- rounding guard, always 1
//!           |||+--- Damm check digit over PPP
//!           +++---- packed fields, lod:2 mode:2 bump:1 thickness:5 bits
//! ```

/// Highest LOD level (0-2); the raw 2-bit value 3 is reserved
pub const LOD_MAX: u8 = 2;

/// Highest crease mode (0-2); the raw 2-bit value 3 is reserved
pub const MODE_MAX: u8 = 2;

/// Maximum thickness storable in the 5-bit field
pub const THICKNESS_MAX: u8 = 31;

/// Bit position of the LOD field within the packed value
pub const LOD_SHIFT: u16 = 8;

/// Mask selecting the LOD bits (`0b11_0000_0000`)
pub const LOD_MASK: u16 = 768;

/// Bit position of the mode field within the packed value
pub const MODE_SHIFT: u16 = 6;

/// Mask selecting the mode bits (`0b00_1100_0000`)
pub const MODE_MASK: u16 = 192;

/// Bit position of the bump flag within the packed value
pub const BUMP_SHIFT: u16 = 5;

/// Mask selecting the bump bit (`0b00_0010_0000`)
pub const BUMP_MASK: u16 = 32;

/// Mask selecting the thickness bits (`0b00_0001_1111`)
pub const THICKNESS_MASK: u16 = 31;

/// Largest value the 10-bit packed integer can hold
pub const PACKED_MAX: u16 = 1023;

/// Decimal positions the check digit occupies below the packed value
pub const CHECK_DIGIT_SCALE: u64 = 10;

/// Fixed offset in the last decimal place of an encoded alpha
///
/// Biases the value away from the floor threshold so that the limited
/// precision of a color channel cannot push it under. Tolerated but never
/// read back on decode.
pub const ROUNDING_GUARD: u64 = 1;

/// Denominator mapping the scaled integer into the alpha range
pub const ALPHA_SCALE: f64 = 100_000.0;

/// Decode multiplier recovering the checksummed integer (packed value plus
/// check digit), dropping the guard digit
pub const FULL_SCALE: f64 = 10_000.0;

/// Decode multiplier recovering the packed integer alone
pub const PACKED_SCALE: f64 = 1_000.0;

/// Channel value written when wiping crease data from a mesh
///
/// 0.0 still decodes as an all-zero crease; downstream consumers treat
/// LOD 0 with zero thickness as inert.
pub const RESET_ALPHA: f32 = 0.0;
