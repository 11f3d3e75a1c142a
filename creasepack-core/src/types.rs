//! Core types for crease-alpha values

use crate::constants::{
    BUMP_MASK, BUMP_SHIFT, LOD_MASK, LOD_MAX, LOD_SHIFT, MODE_MASK, MODE_MAX, MODE_SHIFT,
    THICKNESS_MASK, THICKNESS_MAX,
};
use crate::error::CreaseError;
use serde::{Deserialize, Serialize};

/// Crease parameters carried by a vertex-color alpha channel
///
/// All four fields together occupy 10 bits of the packed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreaseParams {
    /// Level-of-detail the crease first appears at (0-2)
    pub lod: u8,

    /// Crease rendering mode (0-2)
    pub mode: u8,

    /// Offset flag keeping adjacent creased vertices from merging
    pub bump: bool,

    /// Crease thickness (0-31)
    pub thickness: u8,
}

impl CreaseParams {
    /// Create crease parameters, validating every field against its range
    ///
    /// Out-of-range fields fail here instead of silently spilling into the
    /// neighboring bit field when packed.
    pub fn new(lod: u8, mode: u8, bump: bool, thickness: u8) -> Result<Self, CreaseError> {
        if lod > LOD_MAX {
            return Err(CreaseError::FieldOutOfRange {
                field: "lod",
                value: lod,
                max: LOD_MAX,
            });
        }

        if mode > MODE_MAX {
            return Err(CreaseError::FieldOutOfRange {
                field: "mode",
                value: mode,
                max: MODE_MAX,
            });
        }

        if thickness > THICKNESS_MAX {
            return Err(CreaseError::FieldOutOfRange {
                field: "thickness",
                value: thickness,
                max: THICKNESS_MAX,
            });
        }

        Ok(Self {
            lod,
            mode,
            bump,
            thickness,
        })
    }

    /// Combine the fields into the 10-bit packed integer
    pub fn packed(&self) -> u16 {
        u16::from(self.lod) << LOD_SHIFT
            | u16::from(self.mode) << MODE_SHIFT
            | u16::from(self.bump) << BUMP_SHIFT
            | u16::from(self.thickness)
    }

    /// Extract fields from a packed integer without range checks
    ///
    /// Foreign data that happens to pass the checksum can surface the
    /// reserved raw value 3 for `lod` or `mode`; callers that care must
    /// compare against `LOD_MAX`/`MODE_MAX` themselves.
    pub fn from_packed(packed: u16) -> Self {
        Self {
            lod: ((packed & LOD_MASK) >> LOD_SHIFT) as u8,
            mode: ((packed & MODE_MASK) >> MODE_SHIFT) as u8,
            bump: packed & BUMP_MASK != 0,
            thickness: (packed & THICKNESS_MASK) as u8,
        }
    }
}

/// The wire representation: a crease packed into a color-channel value
///
/// Created by `encode_alpha`, read back by `decode_alpha`, always replaced
/// wholesale. The channel is effectively single precision, hence `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedAlpha(f32);

impl EncodedAlpha {
    /// Wrap a raw channel value
    pub const fn from_raw(value: f32) -> Self {
        Self(value)
    }

    /// The raw channel value
    pub const fn value(&self) -> f32 {
        self.0
    }
}

impl From<f32> for EncodedAlpha {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<EncodedAlpha> for f32 {
    fn from(alpha: EncodedAlpha) -> f32 {
        alpha.0
    }
}
