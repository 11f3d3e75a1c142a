//! # Creasepack Core
//!
//! Packs crease authoring parameters (LOD, mode, bump, thickness) into a
//! single vertex-color alpha value with an embedded Damm check digit, and
//! recovers them losslessly while rejecting alphas that never carried
//! crease data.
//!
//! ## Modules
//!
//! - `constants`: Packing layout constants and limits
//! - `damm`: Damm algorithm checksum engine
//! - `types`: Core types (CreaseParams, EncodedAlpha)
//! - `encoder`: Alpha encoding
//! - `decoder`: Checksum-validated alpha decoding
//! - `legacy`: v1 format decoding and migration
//! - `channel`: Bulk sweep and migration over whole alpha channels

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod channel;
pub mod constants;
pub mod damm;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod legacy;
pub mod types;

// Re-export commonly used items
pub use decoder::decode_alpha;
pub use encoder::encode_alpha;
pub use error::CreaseError;
pub use types::{CreaseParams, EncodedAlpha};

/// Result type alias for crease codec operations
pub type Result<T> = core::result::Result<T, CreaseError>;
