//! Legacy (v1) alpha format and migration
//!
//! The first revision packed lod/bump/thickness as fixed-width decimal
//! digits with no checksum and no mode field. It survives only as a
//! migration source: v1-authored channels are rewritten into the current
//! format in one pass and never written again.

use crate::encoder::encode_alpha;
use crate::types::{CreaseParams, EncodedAlpha};
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::warn;

/// Divisor rescaling v1 thickness [0, 99] into the 5-bit [0, 31] range
///
/// Chosen empirically alongside the encode rounding guard; kept as-is so
/// previously authored channels migrate bit-for-bit identically.
const THICKNESS_RESCALE: f64 = 3.1;

/// v1 LOD values are 1-based; anything past this cannot have come from the
/// v1 encoder
const V1_LOD_MAX: u8 = 3;

/// Fields of a v1 alpha value
///
/// `lod` is 1-based; 0 means "no crease authored here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyParams {
    /// Level-of-detail digit (1-3, or 0 for no crease)
    pub lod: u8,

    /// Bump flag digit (0 or 1)
    pub bump: u8,

    /// Thickness (0-99)
    pub thickness: u8,
}

/// Decode a v1 alpha value: three fixed-width decimal fields, no checksum
///
/// There is no invalid-input case in the v1 format; out-of-channel inputs
/// decode to the all-zero "no crease" value.
pub fn decode_alpha_v1(alpha: f32) -> LegacyParams {
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return LegacyParams {
            lod: 0,
            bump: 0,
            thickness: 0,
        };
    }

    let a = f64::from(alpha);
    let lod = (a * 10.0) as u64;
    let bump = (a * 100.0) as u64 - lod * 10;
    let thickness = (a * 10_000.0) as u64 - lod * 1000 - bump * 100;

    LegacyParams {
        lod: lod as u8,
        bump: bump as u8,
        thickness: thickness as u8,
    }
}

/// Migrate a single v1 alpha value to the current format
///
/// Returns `None` for slots that hold no v1 crease (`lod == 0`, or a value
/// the v1 encoder could never have produced); the caller leaves those
/// untouched. Migration reindexes LOD to start at 0, rescales thickness
/// into the 5-bit range, and defaults the mode field v1 lacked to 0.
pub fn migrate_v1(alpha: f32) -> Option<EncodedAlpha> {
    let legacy = decode_alpha_v1(alpha);
    if legacy.lod == 0 {
        return None;
    }

    if legacy.lod > V1_LOD_MAX || legacy.bump > 1 {
        #[cfg(feature = "logging")]
        warn!(
            "alpha {} decodes to v1 fields outside the authored domain, skipping",
            alpha
        );

        return None;
    }

    // In-domain by the guards above: lod-1 <= 2, floor(99 / 3.1) <= 31
    let params = CreaseParams {
        lod: legacy.lod - 1,
        mode: 0,
        bump: legacy.bump == 1,
        thickness: (f64::from(legacy.thickness) / THICKNESS_RESCALE) as u8,
    };

    Some(encode_alpha(&params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_alpha;

    #[test]
    fn test_decode_v1_known_vector() {
        // 0.2193: lod 2, bump 1, thickness 93
        let legacy = decode_alpha_v1(0.2193);

        assert_eq!(
            legacy,
            LegacyParams {
                lod: 2,
                bump: 1,
                thickness: 93,
            }
        );
    }

    #[test]
    fn test_decode_v1_no_crease() {
        let legacy = decode_alpha_v1(0.0);

        assert_eq!(legacy.lod, 0);
        assert_eq!(legacy.bump, 0);
        assert_eq!(legacy.thickness, 0);
    }

    #[test]
    fn test_migrate_known_vector() {
        // lod 2 -> 1, thickness floor(93 / 3.1) = 30, mode defaults to 0
        let migrated = migrate_v1(0.2193).unwrap();
        let params = decode_alpha(migrated).unwrap();

        assert_eq!(params, CreaseParams::new(1, 0, true, 30).unwrap());
    }

    #[test]
    fn test_migrate_skips_no_crease() {
        assert_eq!(migrate_v1(0.0), None);
        assert_eq!(migrate_v1(0.0042), None);
    }

    #[test]
    fn test_migrate_skips_default_opacity() {
        // 1.0 would decode to lod 10; the v1 encoder never wrote that
        assert_eq!(migrate_v1(1.0), None);
    }

    #[test]
    fn test_migrate_round_trips_through_current_decoder() {
        for (lod, bump, thickness) in [(1u64, 0u64, 0u64), (2, 1, 50), (3, 1, 99)] {
            let v1 = ((lod * 1000 + bump * 100 + thickness) as f64 / 10_000.0) as f32;
            let migrated = migrate_v1(v1).unwrap();
            let params = decode_alpha(migrated).unwrap();

            assert_eq!(u64::from(params.lod), lod - 1);
            assert_eq!(params.mode, 0);
            assert_eq!(u64::from(params.bump), bump);
            assert_eq!(
                u64::from(params.thickness),
                (thickness as f64 / 3.1) as u64
            );
        }
    }
}
