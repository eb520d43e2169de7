//! Exact-match search.
//!
//! Descends from a node toward any leaf holding a record whose embedding
//! equals the target within tolerance. Bounding spheres of siblings may
//! overlap, so every child whose sphere contains the target is tried in
//! order; a failed descent falls through to the next intersecting sibling
//! rather than ending the search.

use crate::point::Point;
use crate::tree::node::{NodeEntries, SsNode};

impl SsNode {
    /// Returns the leaf in this subtree holding a record whose embedding
    /// equals `target` within tolerance, or `None`.
    pub fn search(&self, target: &Point) -> Option<&SsNode> {
        match &self.entries {
            NodeEntries::Leaf(records) => records
                .iter()
                .any(|r| r.embedding.approx_eq(target))
                .then_some(self),
            NodeEntries::Internal(children) => children
                .iter()
                .filter(|child| child.intersects_point(target))
                .find_map(|child| child.search(target)),
        }
    }
}
