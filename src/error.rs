//! Error types for point arithmetic.
//!
//! All errors are synchronous and surface at the call site. Tree insertion
//! and search never fail; only the fallible `Point` operations (indexed
//! access and scalar division) produce errors.

/// Error raised by a fallible `Point` operation.
#[derive(Debug, thiserror::Error)]
pub enum PointError {
    /// Coordinate index past the end of the point.
    #[error("coordinate index {index} out of range for dimension {dimension}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The point's dimensionality.
        dimension: usize,
    },

    /// Scalar divisor indistinguishable from zero.
    #[error("division by scalar {scalar} within tolerance of zero")]
    DivisionByZero {
        /// The rejected divisor.
        scalar: f32,
    },
}

/// Result type alias for point operations.
pub type PointResult<T> = Result<T, PointError>;
