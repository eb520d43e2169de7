//! SS-Tree node structure and bounding-envelope maintenance.
//!
//! An [`SsNode`] carries a bounding sphere (centroid + radius) and either
//! records (leaf) or child nodes (internal) — a tagged variant, no dynamic
//! dispatch. Nodes own their children; there are no parent links, the
//! recursive insert carries the parent on the call stack.
//!
//! The envelope rule: the centroid is the arithmetic mean of the entry
//! centroids, the radius the smallest value containing every entry. For an
//! internal node containment means the child's whole sphere, so its radius
//! term is `distance(centroid, child.centroid) + child.radius` — the
//! centroid-to-centroid maximum alone under-covers grandchildren.

use crate::config::EPSILON;
use crate::point::Point;
use crate::record::Record;
use std::sync::Arc;

/// The entries of a node: records in leaves, child nodes in internal nodes.
#[derive(Debug)]
pub(crate) enum NodeEntries {
    Leaf(Vec<Arc<Record>>),
    Internal(Vec<SsNode>),
}

/// A node of the similarity search tree.
#[derive(Debug)]
pub struct SsNode {
    centroid: Point,
    radius: f32,
    pub(crate) entries: NodeEntries,
}

impl SsNode {
    /// Builds a leaf over the given records and computes its envelope.
    pub(crate) fn leaf(records: Vec<Arc<Record>>) -> Self {
        debug_assert!(!records.is_empty());
        let mut node = Self {
            centroid: records[0].embedding.clone(),
            radius: 0.0,
            entries: NodeEntries::Leaf(records),
        };
        node.update_envelope();
        node
    }

    /// Builds an internal node over the given children and computes its envelope.
    pub(crate) fn internal(children: Vec<SsNode>) -> Self {
        debug_assert!(!children.is_empty());
        let mut node = Self {
            centroid: children[0].centroid.clone(),
            radius: 0.0,
            entries: NodeEntries::Internal(children),
        };
        node.update_envelope();
        node
    }

    /// The center of the bounding sphere.
    #[inline]
    pub fn centroid(&self) -> &Point {
        &self.centroid
    }

    /// The radius of the bounding sphere.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns `true` if this node stores records rather than children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.entries, NodeEntries::Leaf(_))
    }

    /// The records of a leaf; empty for internal nodes.
    pub fn records(&self) -> &[Arc<Record>] {
        match &self.entries {
            NodeEntries::Leaf(records) => records,
            NodeEntries::Internal(_) => &[],
        }
    }

    /// The children of an internal node; empty for leaves.
    pub fn children(&self) -> &[SsNode] {
        match &self.entries {
            NodeEntries::Leaf(_) => &[],
            NodeEntries::Internal(children) => children,
        }
    }

    /// Number of entries held directly by this node.
    pub fn entry_count(&self) -> usize {
        match &self.entries {
            NodeEntries::Leaf(records) => records.len(),
            NodeEntries::Internal(children) => children.len(),
        }
    }

    /// Total number of records stored in this subtree.
    pub fn record_count(&self) -> usize {
        match &self.entries {
            NodeEntries::Leaf(records) => records.len(),
            NodeEntries::Internal(children) => children.iter().map(SsNode::record_count).sum(),
        }
    }

    /// Number of levels in this subtree; a leaf is one level.
    pub fn height(&self) -> usize {
        match &self.entries {
            NodeEntries::Leaf(_) => 1,
            NodeEntries::Internal(children) => {
                1 + children.iter().map(SsNode::height).max().unwrap_or(0)
            }
        }
    }

    /// Returns `true` if the bounding sphere contains `point`.
    ///
    /// Allows `EPSILON` of slack at the boundary so a stored record's own
    /// leaf reports containment despite rounding of the radius.
    pub fn intersects_point(&self, point: &Point) -> bool {
        Point::distance(&self.centroid, point) <= self.radius + EPSILON
    }

    /// The centroids this node's envelope is computed over: record embeddings
    /// for leaves, child centroids for internal nodes.
    pub(crate) fn entry_centroids(&self) -> Vec<&Point> {
        match &self.entries {
            NodeEntries::Leaf(records) => records.iter().map(|r| &r.embedding).collect(),
            NodeEntries::Internal(children) => children.iter().map(|c| &c.centroid).collect(),
        }
    }

    /// Recomputes centroid and radius from the current entries.
    ///
    /// Invoked after every entry mutation and on each return path of the
    /// recursive insert.
    pub(crate) fn update_envelope(&mut self) {
        let centroid = {
            let centroids = self.entry_centroids();
            debug_assert!(!centroids.is_empty());
            let mut sum = Point::zeros(centroids[0].dimension());
            for c in &centroids {
                sum += *c;
            }
            sum.divide_in_place(centroids.len() as f32)
                .expect("entry count is nonzero after the emptiness assert");
            sum
        };
        let radius = match &self.entries {
            NodeEntries::Leaf(records) => records
                .iter()
                .map(|r| Point::distance(&centroid, &r.embedding))
                .fold(0.0f32, f32::max),
            NodeEntries::Internal(children) => children
                .iter()
                .map(|c| Point::distance(&centroid, &c.centroid) + c.radius)
                .fold(0.0f32, f32::max),
        };
        self.centroid = centroid;
        self.radius = radius;
    }

    /// Appends a record to a leaf. The envelope is stale until
    /// [`SsNode::update_envelope`] runs.
    pub(crate) fn push_record(&mut self, record: Arc<Record>) {
        match &mut self.entries {
            NodeEntries::Leaf(records) => records.push(record),
            NodeEntries::Internal(_) => unreachable!("push_record on an internal node"),
        }
    }

    /// Mutable access to the child at `index`.
    pub(crate) fn child_mut(&mut self, index: usize) -> &mut SsNode {
        match &mut self.entries {
            NodeEntries::Internal(children) => &mut children[index],
            NodeEntries::Leaf(_) => unreachable!("child_mut on a leaf"),
        }
    }

    /// Erases the child at `index` and appends both halves of its split.
    pub(crate) fn replace_child(&mut self, index: usize, first: SsNode, second: SsNode) {
        match &mut self.entries {
            NodeEntries::Internal(children) => {
                children.remove(index);
                children.push(first);
                children.push(second);
            }
            NodeEntries::Leaf(_) => unreachable!("replace_child on a leaf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, coords: &[f32]) -> Arc<Record> {
        Arc::new(Record::new(id, Point::new(coords.to_vec())))
    }

    #[test]
    fn test_singleton_leaf_envelope() {
        let node = SsNode::leaf(vec![rec("a", &[1.0, 2.0])]);
        assert!(node.is_leaf());
        assert!(node.centroid().approx_eq(&Point::new(vec![1.0, 2.0])));
        assert_eq!(node.radius(), 0.0);
        assert_eq!(node.entry_count(), 1);
        assert_eq!(node.record_count(), 1);
        assert_eq!(node.height(), 1);
    }

    #[test]
    fn test_leaf_envelope_is_mean_and_max_distance() {
        let node = SsNode::leaf(vec![rec("a", &[0.0, 0.0]), rec("b", &[2.0, 0.0])]);
        assert!(node.centroid().approx_eq(&Point::new(vec![1.0, 0.0])));
        assert!((node.radius() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_internal_radius_covers_child_spheres() {
        // Two leaves with radius 1 centered at x = 0 and x = 4. The parent
        // centroid lands at x = 2; the centroid-to-centroid maximum is 2 but
        // full containment needs 2 + 1 = 3.
        let left = SsNode::leaf(vec![rec("a", &[-1.0, 0.0]), rec("b", &[1.0, 0.0])]);
        let right = SsNode::leaf(vec![rec("c", &[3.0, 0.0]), rec("d", &[5.0, 0.0])]);
        let parent = SsNode::internal(vec![left, right]);
        assert!(parent.centroid().approx_eq(&Point::new(vec![2.0, 0.0])));
        assert!((parent.radius() - 3.0).abs() < 1e-5);
        for child in parent.children() {
            let gap = Point::distance(parent.centroid(), child.centroid()) + child.radius();
            assert!(
                gap <= parent.radius() + EPSILON,
                "child sphere escapes parent: {gap} > {}",
                parent.radius()
            );
        }
    }

    #[test]
    fn test_intersects_point_boundary() {
        let node = SsNode::leaf(vec![rec("a", &[0.0, 0.0]), rec("b", &[2.0, 0.0])]);
        assert!(node.intersects_point(&Point::new(vec![2.0, 0.0])));
        assert!(node.intersects_point(&Point::new(vec![1.0, 1.0])));
        assert!(!node.intersects_point(&Point::new(vec![4.0, 0.0])));
    }

    #[test]
    fn test_observation_api_on_wrong_kind() {
        let leaf = SsNode::leaf(vec![rec("a", &[0.0])]);
        assert!(leaf.children().is_empty());
        let parent = SsNode::internal(vec![SsNode::leaf(vec![rec("b", &[1.0])])]);
        assert!(parent.records().is_empty());
        assert!(!parent.is_leaf());
        assert_eq!(parent.height(), 2);
        assert_eq!(parent.record_count(), 1);
    }

    #[test]
    fn test_update_envelope_after_push() {
        let mut node = SsNode::leaf(vec![rec("a", &[0.0, 0.0])]);
        node.push_record(rec("b", &[4.0, 0.0]));
        node.update_envelope();
        assert!(node.centroid().approx_eq(&Point::new(vec![2.0, 0.0])));
        assert!((node.radius() - 2.0).abs() < 1e-6);
    }
}
