use crate::error::Error;
use crate::metric::Metric;
use crate::tree::{Node, Point, Tree};

/// Best match found so far during one query. Each call to [`Tree::nearest`]
/// owns its own instance, so concurrent queries over a shared tree never
/// touch shared mutable state.
struct BestMatch {
    index: usize,
    distance: f64,
}

impl Tree {
    /// Finds the nearest neighbor of a query point under the given metric.
    ///
    /// Descends from the root, visiting the near side of each hyperplane
    /// first and crossing to the far side only when the hyperplane gap is
    /// smaller than the best distance found so far. The gap is a lower bound
    /// on the distance to any far-side point, so pruned subtrees cannot
    /// contain a closer match.
    ///
    /// When several points tie for minimum distance, the one returned is
    /// whichever the traversal order updates last; no tie-break is
    /// guaranteed.
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    pub fn nearest(&self, query: &Point, metric: Metric) -> Result<&Node, Error> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyTree);
        }

        let mut best = BestMatch {
            index: 0,
            distance: f64::INFINITY,
        };
        self.descend(0, query, metric, &mut best);
        Ok(&self.nodes[best.index])
    }

    /// [`Tree::nearest`] with the metric given by name: `"Euclidean"`,
    /// `"Manhattan"` or `"Max"`.
    ///
    /// Returns [`Error::InvalidMetric`] for any other name.
    pub fn nearest_by_name(&self, query: &Point, metric: &str) -> Result<&Node, Error> {
        let metric: Metric = metric.parse()?;
        self.nearest(query, metric)
    }

    fn descend(&self, index: usize, query: &Point, metric: Metric, best: &mut BestMatch) {
        let node = &self.nodes[index];

        let distance = metric.distance(query, &node.point);
        if distance < best.distance {
            best.index = index;
            best.distance = distance;
        }

        // Stop at a leaf, or once an exact match makes descending pointless
        let axis = match node.axis {
            Some(axis) if best.distance > 0.0 => axis,
            _ => return,
        };

        match (node.left, node.right) {
            // A lone child is visited unconditionally
            (Some(child), None) | (None, Some(child)) => {
                self.descend(child, query, metric, best);
            }
            (Some(left), Some(right)) => {
                let (near, far) = if query[axis] < node.point[axis] {
                    (left, right)
                } else {
                    (right, left)
                };
                self.descend(near, query, metric, best);
                // The far side can only improve on the best match if the
                // query lies closer to the hyperplane than the best distance
                if (query[axis] - node.point[axis]).abs() < best.distance {
                    self.descend(far, query, metric, best);
                }
            }
            (None, None) => {}
        }
    }
}
