//! Similarity search tree: height-balanced index of bounding spheres.
//!
//! [`SsTree`] owns an optional root [`SsNode`] and the per-tree settings:
//! embedding dimension and fan-out `M` (maximum entries per node). The first
//! insert creates a leaf root; later inserts descend recursively, and when a
//! split pair escapes the root the tree installs a new internal root over the
//! two halves — the only way the tree gains height, which keeps every leaf at
//! the same depth.
//!
//! The tree is a single-writer, single-threaded structure with no internal
//! synchronization; callers needing concurrent readers wrap it in their own
//! lock.

/// Descent and recursive insertion.
pub mod insert;
/// Node structure and bounding-envelope maintenance.
pub mod node;
/// Exact-match search.
pub mod search;
/// Variance-driven split policy.
pub mod split;

pub use node::SsNode;

use crate::config::{DEFAULT_MAX_ENTRIES, MIN_MAX_ENTRIES};
use crate::point::Point;
use crate::record::Record;
use std::sync::Arc;

/// A similarity search tree over externally-owned records.
#[derive(Debug)]
pub struct SsTree {
    root: Option<SsNode>,
    dimension: usize,
    max_entries: usize,
}

impl SsTree {
    /// Creates an empty tree for embeddings of the given dimension with at
    /// most `max_entries` entries per node.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is below [`MIN_MAX_ENTRIES`].
    pub fn new(dimension: usize, max_entries: usize) -> Self {
        assert!(
            max_entries >= MIN_MAX_ENTRIES,
            "max_entries must be at least {MIN_MAX_ENTRIES}, got {max_entries}"
        );
        Self {
            root: None,
            dimension,
            max_entries,
        }
    }

    /// Creates an empty tree with the default fan-out
    /// ([`DEFAULT_MAX_ENTRIES`]).
    pub fn with_default_capacity(dimension: usize) -> Self {
        Self::new(dimension, DEFAULT_MAX_ENTRIES)
    }

    /// The embedding dimension this tree indexes.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Maximum entries per node (`M`).
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Minimum entries per split half (`m = M / 2`).
    pub fn min_entries(&self) -> usize {
        self.max_entries / 2
    }

    /// Borrows the root node for structural inspection.
    pub fn root(&self) -> Option<&SsNode> {
        self.root.as_ref()
    }

    /// Number of distinct records indexed.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, SsNode::record_count)
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels from root to leaves; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, SsNode::height)
    }

    /// Inserts a record, sharing ownership with the caller.
    ///
    /// Idempotent for a record already present in its target leaf (same
    /// identifier or tolerance-equal embedding). Never fails; the embedding
    /// dimension must match the tree's.
    pub fn insert(&mut self, record: Arc<Record>) {
        debug_assert_eq!(record.embedding.dimension(), self.dimension);

        // First record — the tree starts as a single-record leaf root.
        if self.root.is_none() {
            self.root = Some(SsNode::leaf(vec![record]));
            return;
        }

        let max_entries = self.max_entries;
        let root = self
            .root
            .as_mut()
            .expect("root is Some after the is_none guard");
        if let Some((first, second)) = root.insert(&record, max_entries) {
            self.root = Some(SsNode::internal(vec![first, second]));
            tracing::debug!(height = self.height(), "root split; tree grew a level");
        }
    }

    /// Returns the leaf holding a record whose embedding equals this
    /// record's within tolerance, or `None`.
    pub fn search(&self, record: &Record) -> Option<&SsNode> {
        self.search_point(&record.embedding)
    }

    /// Exact-match search by raw target point. `None` on an empty tree.
    pub fn search_point(&self, target: &Point) -> Option<&SsNode> {
        self.root.as_ref().and_then(|root| root.search(target))
    }
}
