//! Fractal tree nodes

use bitflags::bitflags;
use hyperfold_math::Vec3;
use slotmap::new_key_type;

new_key_type! {
    /// Key to a node in a [`crate::FractalTree`] arena
    pub struct NodeKey;
}

bitflags! {
    /// Styling hints attached to a node at generation time
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// On the golden-spiral path
        const PATH = 1 << 0;
        /// The inner cube of a grid cell
        const INNER = 1 << 1;
        /// Has no children
        const LEAF = 1 << 2;
    }
}

/// Position of a grid cell in its lattice
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeCell {
    /// Cell index along x, y, z
    pub index: [u32; 3],
    /// Distance from the lattice center in index space, normalized by
    /// `√3·grid_size/2`, so the corners sit just below 1
    pub distance_from_center: f64,
}

/// One generated cube
#[derive(Clone, Debug, PartialEq)]
pub struct FractalNode {
    /// Recursion level, the root is 1
    pub depth: u32,
    /// Edge length of the cube
    pub size: f64,
    /// Center relative to the parent's center (to the requested center for roots)
    pub offset: Vec3,
    /// Absolute center
    pub center: Vec3,
    pub parent: Option<NodeKey>,
    /// Children in generation order
    pub children: Vec<NodeKey>,
    pub flags: NodeFlags,
    /// Set for grid cells only
    pub lattice: Option<LatticeCell>,
}

impl FractalNode {
    #[inline]
    pub fn is_path(&self) -> bool {
        self.flags.contains(NodeFlags::PATH)
    }

    #[inline]
    pub fn is_inner(&self) -> bool {
        self.flags.contains(NodeFlags::INNER)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_queries() {
        let mut node = FractalNode {
            depth: 1,
            size: 2.0,
            offset: Vec3::ZERO,
            center: Vec3::ZERO,
            parent: None,
            children: Vec::new(),
            flags: NodeFlags::PATH | NodeFlags::LEAF,
            lattice: None,
        };
        assert!(node.is_path());
        assert!(!node.is_inner());
        assert!(node.is_leaf());

        node.flags = NodeFlags::INNER;
        assert!(node.is_inner());
        assert!(!node.is_path());
    }
}
