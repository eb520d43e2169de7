//! Descent and recursive insertion.
//!
//! Insertion descends to the leaf whose centroid chain is closest to the new
//! embedding, appends there, and unwinds: every node on the return path
//! refreshes its envelope, and a node left holding `M + 1` entries splits,
//! handing the pair to its parent. The parent erases the split child and
//! adopts both halves; a pair escaping the root makes the tree grow a level.
//!
//! A record already present in the target leaf — same identifier, or an
//! embedding equal within tolerance — is suppressed, leaving the tree
//! unchanged.

use crate::point::Point;
use crate::record::Record;
use crate::tree::node::SsNode;
use std::sync::Arc;

impl SsNode {
    /// Index of the child whose centroid is closest to `target`.
    /// Ties break to the earliest child.
    pub(crate) fn closest_child_index(&self, target: &Point) -> usize {
        let children = self.children();
        debug_assert!(!children.is_empty());
        let mut best = 0;
        let mut best_dist = Point::distance(children[0].centroid(), target);
        for (index, child) in children.iter().enumerate().skip(1) {
            let dist = Point::distance(child.centroid(), target);
            if dist < best_dist {
                best_dist = dist;
                best = index;
            }
        }
        best
    }

    /// Recursive insert. Returns the split halves when this node overflowed,
    /// `None` otherwise; the caller owns the replacement.
    pub(crate) fn insert(
        &mut self,
        record: &Arc<Record>,
        max_entries: usize,
    ) -> Option<(SsNode, SsNode)> {
        if self.is_leaf() {
            if self.contains_duplicate(record) {
                tracing::trace!(id = %record.id, "duplicate record suppressed");
                return None;
            }
            self.push_record(Arc::clone(record));
        } else {
            let index = self.closest_child_index(&record.embedding);
            if let Some((first, second)) = self.child_mut(index).insert(record, max_entries) {
                self.replace_child(index, first, second);
            }
        }
        self.update_envelope();
        if self.entry_count() <= max_entries {
            None
        } else {
            Some(self.split(max_entries))
        }
    }

    /// Leaf-level duplicate check: identifier match or tolerance-equal embedding.
    fn contains_duplicate(&self, record: &Record) -> bool {
        self.records().iter().any(|existing| {
            existing.id == record.id || existing.embedding.approx_eq(&record.embedding)
        })
    }
}
