//! # sstree-core
//!
//! Embeddable in-memory similarity search tree (SS-Tree) over dense
//! embedding vectors, built as the substrate for nearest-neighbor retrieval
//! of image/text embeddings.
//!
//! This is a pure library crate with zero async dependencies — suitable for
//! embedding directly in Rust applications or other language bindings.
//!
//! ## Features
//!
//! - **Height-balanced bounding-sphere index**: every node covers its
//!   entries with a centroid + radius envelope; all leaves sit at the same
//!   depth under every insertion order
//! - **Variance-driven splits**: overflowing nodes partition along the axis
//!   of maximum sample variance at the index minimizing the summed partition
//!   variance
//! - **Exact membership search** that explores every overlapping bounding
//!   sphere, tolerant of floating-point boundary rounding
//! - **SIMD distance kernels** (NEON / AVX2 with scalar fallback) behind a
//!   plain mathematical contract
//! - **Shared record ownership**: the tree indexes `Arc<Record>` handles
//!   supplied and owned by the caller
//!
//! ## Architecture
//!
//! ```text
//! SsTree → SsNode { centroid, radius, Leaf(records) | Internal(children) }
//! insert: descend closest child → append at leaf → envelope updates bottom-up
//!         → splits cascade toward the root
//! search: descend every child whose sphere contains the target
//! ```

/// Global configuration constants: tolerance, defaults, and floors.
pub mod config;
/// Error types for fallible point operations.
pub mod error;
/// Points in Euclidean space with SIMD-backed norm and distance.
pub mod point;
/// The externally-owned (identifier, embedding) record type.
pub mod record;
/// The similarity search tree: nodes, insertion, splits, and search.
pub mod tree;

pub use error::{PointError, PointResult};
pub use point::Point;
pub use record::Record;
pub use tree::{SsNode, SsTree};
