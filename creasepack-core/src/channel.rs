//! Bulk operations over a whole vertex-color alpha channel
//!
//! The mesh-editing layer hands the codec an entire channel at once: a
//! flat slice of alphas in vertex order. Sweeping classifies every slot,
//! tolerating the usual mix of crease values, wiped slots, and untouched
//! default opacity in the same channel.

use crate::decoder::decode_alpha;
use crate::legacy::migrate_v1;
use crate::types::{CreaseParams, EncodedAlpha};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// A crease found at a specific slot in a channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocatedCrease {
    /// Vertex index the alpha was read from
    pub index: usize,

    /// The raw channel value
    pub alpha: f32,

    /// The decoded parameters
    pub params: CreaseParams,
}

/// Summary counters for a channel sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Total slots examined
    pub slots: usize,

    /// Slots carrying a valid crease
    pub creases: usize,

    /// Slots holding plain (non-crease) alpha data
    pub plain: usize,

    /// Crease count per raw LOD value (index 3 counts the reserved value)
    pub lod_counts: [usize; 4],
}

impl ChannelStats {
    /// Fraction of slots carrying crease data, as a percentage
    pub fn crease_rate(&self) -> f64 {
        if self.slots == 0 {
            0.0
        } else {
            self.creases as f64 * 100.0 / self.slots as f64
        }
    }
}

/// Summary counters for a v1 channel migration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationStats {
    /// Total slots examined
    pub slots: usize,

    /// Slots rewritten into the current format
    pub migrated: usize,

    /// Slots left untouched (no v1 crease data)
    pub skipped: usize,
}

/// Sweep a channel and collect every slot holding a valid crease
pub fn sweep_channel(alphas: &[f32]) -> Vec<LocatedCrease> {
    sweep_channel_with_stats(alphas).0
}

/// Sweep a channel, also reporting summary statistics
pub fn sweep_channel_with_stats(alphas: &[f32]) -> (Vec<LocatedCrease>, ChannelStats) {
    let mut found = Vec::new();
    let mut stats = ChannelStats {
        slots: alphas.len(),
        ..ChannelStats::default()
    };

    #[cfg(feature = "logging")]
    debug!("Sweeping channel of {} slots", alphas.len());

    for (index, &alpha) in alphas.iter().enumerate() {
        match decode_alpha(EncodedAlpha::from_raw(alpha)) {
            Some(params) => {
                stats.creases += 1;
                stats.lod_counts[usize::from(params.lod)] += 1;
                found.push(LocatedCrease {
                    index,
                    alpha,
                    params,
                });
            }
            None => stats.plain += 1,
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Sweep complete: {} creases in {} slots",
        stats.creases, stats.slots
    );

    (found, stats)
}

/// Vertex indices of creases whose LOD lies in `lower..=upper`
///
/// The index list feeds straight back into a component selection on the
/// host side.
pub fn filter_by_lod(creases: &[LocatedCrease], lower: u8, upper: u8) -> Vec<usize> {
    creases
        .iter()
        .filter(|crease| (lower..=upper).contains(&crease.params.lod))
        .map(|crease| crease.index)
        .collect()
}

/// Rewrite a v1-authored channel into the current format
///
/// Slots without v1 crease data keep their original value. The migration
/// is one-way: current-format values fed back in would be reinterpreted
/// as v1 digits, so the caller must know the channel is v1.
pub fn migrate_channel(alphas: &[f32]) -> (Vec<f32>, MigrationStats) {
    let mut migrated = Vec::with_capacity(alphas.len());
    let mut stats = MigrationStats {
        slots: alphas.len(),
        ..MigrationStats::default()
    };

    for &alpha in alphas {
        match migrate_v1(alpha) {
            Some(encoded) => {
                stats.migrated += 1;
                migrated.push(encoded.value());
            }
            None => {
                stats.skipped += 1;
                migrated.push(alpha);
            }
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Migration complete: {} of {} slots rewritten",
        stats.migrated, stats.slots
    );

    (migrated, stats)
}
