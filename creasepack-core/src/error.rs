//! Error types for crease codec operations

/// Errors that can occur when constructing crease parameters
///
/// Decoding has no error type: an alpha value that fails the checksum is an
/// expected, common input and surfaces as `None`, not as an error.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreaseError {
    /// A semantic field does not fit its allocated range
    #[cfg_attr(
        feature = "std",
        error("{field} value {value} exceeds maximum {max}")
    )]
    FieldOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The value the caller supplied.
        value: u8,
        /// The largest value the field admits.
        max: u8,
    },
}
