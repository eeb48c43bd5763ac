//! Error types shared by the checksum and validation modules.
//!
//! Errors mean a unit could not be checked at all. A segment whose
//! embedded checksum merely disagrees with the recomputation is not an
//! error, it is a `false` verdict from the validator.

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Address material that could not be read as an IPv4 address.
    #[error("Malformed IPv4 address: {0}")]
    MalformedAddress(String),

    /// Segment longer than the pseudo-header's 16-bit length field can carry.
    #[error("Segment length {0} exceeds the 16-bit TCP length field (max 65535)")]
    LengthOverflow(usize),

    /// Segment too short to contain a TCP header.
    #[error("Malformed segment: {0} bytes is shorter than the 20-byte TCP header")]
    MalformedSegment(usize),
}

/// Result alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
