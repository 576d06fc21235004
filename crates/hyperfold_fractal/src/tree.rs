//! The generated fractal tree
//!
//! Nodes live in a generational arena and refer to each other by
//! [`NodeKey`]. The tree is read-only once built; changing a parameter means
//! generating a new one.

use std::collections::BTreeMap;

use hyperfold_math::Vec3;
use slotmap::SlotMap;

use crate::node::{FractalNode, NodeKey};
use crate::spline;
use crate::strategy::PlacementStrategy;

/// Arena of cubes plus the ordered list of top-level nodes
#[derive(Clone, Debug)]
pub struct FractalTree {
    pub(crate) nodes: SlotMap<NodeKey, FractalNode>,
    pub(crate) roots: Vec<NodeKey>,
    pub(crate) strategy: PlacementStrategy,
    pub(crate) scale_factor: f64,
    pub(crate) max_depth: u32,
}

impl FractalTree {
    /// Get a node by key
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&FractalNode> {
        self.nodes.get(key)
    }

    /// Top-level nodes: one for recursive strategies, every cell for the grid
    #[inline]
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    /// The first top-level node
    pub fn root(&self) -> Option<&FractalNode> {
        self.roots.first().and_then(|k| self.nodes.get(*k))
    }

    /// Children of a node, in generation order
    pub fn children(&self, key: NodeKey) -> impl Iterator<Item = &FractalNode> + '_ {
        self.nodes
            .get(key)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |k| self.nodes.get(*k))
    }

    /// Total number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Strategy the tree was built with
    #[inline]
    pub fn strategy(&self) -> &PlacementStrategy {
        &self.strategy
    }

    /// Size ratio between a child and its parent
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Depth ceiling the tree was built with
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Pre-order depth-first walk over every root in order
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Nodes without children
    pub fn leaves(&self) -> impl Iterator<Item = (NodeKey, &FractalNode)> + '_ {
        self.iter().filter(|(_, n)| n.is_leaf())
    }

    /// Node count per depth level
    pub fn count_by_depth(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for node in self.nodes.values() {
            *counts.entry(node.depth).or_insert(0) += 1;
        }
        counts
    }

    /// Number of nodes flagged as golden-spiral path nodes
    pub fn path_node_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_path()).count()
    }

    /// Keys of the spiral path from the root down to the deepest path node
    ///
    /// Empty unless the root itself is a path node.
    pub fn spiral_path_keys(&self) -> Vec<NodeKey> {
        let mut path = Vec::new();
        let mut current = match self.roots.first() {
            Some(k) if self.nodes.get(*k).is_some_and(|n| n.is_path()) => Some(*k),
            _ => None,
        };

        while let Some(key) = current {
            path.push(key);
            current = self.nodes.get(key).and_then(|n| {
                n.children
                    .iter()
                    .copied()
                    .find(|c| self.nodes.get(*c).is_some_and(|child| child.is_path()))
            });
        }
        path
    }

    /// Centers of the spiral path nodes, root first
    pub fn spiral_path(&self) -> Vec<Vec3> {
        self.spiral_path_keys()
            .into_iter()
            .filter_map(|k| self.nodes.get(k).map(|n| n.center))
            .collect()
    }

    /// Smoothed curve through the spiral path, `divisions + 1` points
    pub fn spiral_curve(&self, divisions: usize) -> Vec<Vec3> {
        spline::catmull_rom_points(&self.spiral_path(), divisions)
    }
}

/// Pre-order iterator over a [`FractalTree`]
pub struct DepthFirst<'a> {
    tree: &'a FractalTree,
    stack: Vec<NodeKey>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (NodeKey, &'a FractalNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.stack.pop() {
            if let Some(node) = self.tree.nodes.get(key) {
                self.stack.extend(node.children.iter().rev().copied());
                return Some((key, node));
            }
        }
        None
    }
}
