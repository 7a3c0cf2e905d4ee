use crate::error::Error;
use crate::partition::partition;
use std::collections::BTreeMap;

/// Coordinates of a data point in R^3.
pub type Point = [f64; 3];

/// Labeled input points, keyed on unique string identifiers. A `BTreeMap`
/// keeps iteration order deterministic, so the same set always builds the
/// same tree.
pub type PointSet = BTreeMap<String, Point>;

/// One vertex of a 3-d tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Axis index in [0, 2] of the splitting hyperplane, or `None` for a leaf.
    pub axis: Option<usize>,
    /// Identifier of the point stored at this node.
    pub key: String,
    /// Coordinates of the point stored at this node.
    pub point: Point,
    /// Node list index of the left child, if any.
    pub left: Option<usize>,
    /// Node list index of the right child, if any.
    pub right: Option<usize>,
}

impl Node {
    /// A leaf has no splitting hyperplane and no children.
    pub fn is_leaf(&self) -> bool {
        self.axis.is_none()
    }
}

/// A static 3-d tree over labeled points, stored as a flat node list.
///
/// Nodes are laid out in pre-order: index 0 is the root, every node precedes
/// both of its children, and a node's entire left subtree occupies a
/// contiguous index range before any node of its right subtree. That layout
/// is what lets the tree live in a plain `Vec` with no parent pointers.
///
/// A tree is immutable once built and may be searched concurrently from any
/// number of threads; each query keeps its own best-match state.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
}

impl Tree {
    /// Builds a balanced 3-d tree from a point set.
    ///
    /// Each recursion step splits its points along their widest axis, places
    /// the median point at the node, and descends into the left side before
    /// the right. The input set is not retained; nodes copy keys and
    /// coordinates.
    ///
    /// Recursion depth equals the tree height: O(log n) for well-distributed
    /// inputs, degrading toward O(n) when many points share coordinates.
    ///
    /// Returns [`Error::EmptyInput`] if the set contains no points.
    pub fn build(points: &PointSet) -> Result<Tree, Error> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }

        let entries: Vec<(String, Point)> = points
            .iter()
            .map(|(key, point)| (key.clone(), *point))
            .collect();

        let mut nodes = Vec::with_capacity(entries.len());
        build_recursive(&mut nodes, entries);
        Ok(Tree { nodes })
    }

    /// Number of nodes, equal to the number of input points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node, absent only on an imported empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// The node at a given node list index.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Appends the subtree for `entries` (non-empty) and returns its root index.
fn build_recursive(nodes: &mut Vec<Node>, entries: Vec<(String, Point)>) -> usize {
    let index = nodes.len();

    if let [(key, point)] = entries.as_slice() {
        nodes.push(Node {
            axis: None,
            key: key.clone(),
            point: *point,
            left: None,
            right: None,
        });
        return index;
    }

    let split = partition(entries);
    nodes.push(Node {
        axis: Some(split.axis),
        key: split.key,
        point: split.point,
        left: None,
        right: None,
    });

    // Left before right keeps each subtree contiguous in the node list
    if !split.left.is_empty() {
        let child = build_recursive(nodes, split.left);
        nodes[index].left = Some(child);
    }
    if !split.right.is_empty() {
        let child = build_recursive(nodes, split.right);
        nodes[index].right = Some(child);
    }

    index
}
