//! Global configuration constants for sstree-core.
//!
//! All tuning parameters and validation limits are defined here as
//! compile-time constants. Per-tree settings (dimension, fan-out) are chosen
//! at construction time; these are the defaults and floors they start from.

/// Absolute tolerance for floating-point coordinate comparison.
///
/// Two coordinates within `EPSILON` of each other are considered equal, both
/// for point equality and for duplicate suppression during insertion. Also
/// the threshold below which a scalar divisor is treated as zero.
pub const EPSILON: f32 = 1e-5;

/// Default embedding dimensionality.
///
/// Matches the output width of common dense image/text embedding models.
pub const DEFAULT_DIMENSION: usize = 768;

/// Default maximum number of entries per tree node (fan-out `M`).
///
/// A node splits when an insertion would leave it with `M + 1` entries.
/// The minimum fill after a split is `M / 2`.
pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// Smallest permitted fan-out.
///
/// Below 2 a split cannot produce two non-empty nodes.
pub const MIN_MAX_ENTRIES: usize = 2;
