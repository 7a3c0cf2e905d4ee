//! JSON persistence for built trees.
//!
//! The format is a single record holding the node count and the full node
//! list. Leaf markers and absent children are encoded by omitting the field
//! rather than by a sentinel index, so a child link of any value is always a
//! real node list index.

use crate::error::Error;
use crate::tree::{Node, Point, Tree};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct NodeRecord {
    id: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hyperplane: Option<usize>,
    key: String,
    coords: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    leftchild: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rightchild: Option<usize>,
}

#[derive(Serialize, Deserialize)]
struct TreeRecord {
    size: usize,
    xyztree: Vec<NodeRecord>,
}

impl Tree {
    /// Encodes the tree as JSON, compact or indented.
    ///
    /// Returns [`Error::EmptyTree`] if there are no nodes to encode.
    pub fn to_json(&self, compact: bool) -> Result<String, Error> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyTree);
        }

        let record = TreeRecord {
            size: self.nodes.len(),
            xyztree: self
                .nodes
                .iter()
                .enumerate()
                .map(|(id, node)| NodeRecord {
                    id,
                    hyperplane: node.axis,
                    key: node.key.clone(),
                    coords: node.point,
                    leftchild: node.left,
                    rightchild: node.right,
                })
                .collect(),
        };

        let json = if compact {
            serde_json::to_string(&record)?
        } else {
            serde_json::to_string_pretty(&record)?
        };
        Ok(json)
    }

    /// Decodes a tree from JSON produced by [`Tree::to_json`].
    ///
    /// Node records may appear in any order; each is placed at its `id`.
    /// Returns [`Error::MalformedTree`] when ids or child links do not
    /// describe a complete node list in pre-order.
    pub fn from_json(json: &str) -> Result<Tree, Error> {
        let record: TreeRecord = serde_json::from_str(json)?;

        if record.size != record.xyztree.len() {
            return Err(Error::MalformedTree(format!(
                "size {} does not match node count {}",
                record.size,
                record.xyztree.len()
            )));
        }

        let mut slots: Vec<Option<Node>> = vec![None; record.size];
        for node in &record.xyztree {
            if node.id >= record.size {
                return Err(Error::MalformedTree(format!(
                    "node id {} out of range for size {}",
                    node.id, record.size
                )));
            }
            if slots[node.id].is_some() {
                return Err(Error::MalformedTree(format!("duplicate node id {}", node.id)));
            }
            for child in [node.leftchild, node.rightchild].into_iter().flatten() {
                if child >= record.size {
                    return Err(Error::MalformedTree(format!(
                        "child link {} out of range for size {}",
                        child, record.size
                    )));
                }
                // Pre-order puts every child strictly after its parent, so a
                // link at or before the node's own id would form a cycle
                if child <= node.id {
                    return Err(Error::MalformedTree(format!(
                        "child link {} does not follow node id {}",
                        child, node.id
                    )));
                }
            }
            slots[node.id] = Some(Node {
                axis: node.hyperplane,
                key: node.key.clone(),
                point: node.coords,
                left: node.leftchild,
                right: node.rightchild,
            });
        }

        let mut nodes = Vec::with_capacity(record.size);
        for (id, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(node) => nodes.push(node),
                None => return Err(Error::MalformedTree(format!("missing node id {}", id))),
            }
        }
        Ok(Tree { nodes })
    }

    /// Writes the tree to a file as JSON, compact or indented.
    pub fn export<P: AsRef<Path>>(&self, path: P, compact: bool) -> Result<(), Error> {
        let json = self.to_json(compact)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads a tree back from a JSON file written by [`Tree::export`].
    pub fn import<P: AsRef<Path>>(path: P) -> Result<Tree, Error> {
        let json = fs::read_to_string(path)?;
        Tree::from_json(&json)
    }
}
