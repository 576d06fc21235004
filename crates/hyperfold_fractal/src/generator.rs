//! Fractal generation
//!
//! [`FractalGenerator`] validates its parameters and the projected node count
//! up front, then builds the whole tree into a fresh arena. Nothing is
//! allocated for a request that fails validation.

use hyperfold_math::Vec3;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::error::FractalError;
use crate::node::{FractalNode, LatticeCell, NodeFlags, NodeKey};
use crate::strategy::{golden_direction, PlacementStrategy, OCTANTS};
use crate::tree::FractalTree;

/// Node ceiling used when none is configured. Admits 6 octant levels (37 449 nodes).
pub const DEFAULT_NODE_LIMIT: usize = 40_000;

/// Largest node ceiling a generator accepts. Admits 7 octant levels (2 396 745 nodes).
pub const MAX_NODE_LIMIT: usize = 10_000_000;

/// Serializable description of a fractal, as found in the `[fractal]` config section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    /// Deepest level, the root being level 1
    pub max_depth: u32,
    /// Edge length of the root cube (of each cell for the grid)
    pub base_size: f64,
    /// Child-to-parent size ratio; the strategy default when absent
    pub scale_factor: Option<f64>,
    pub strategy: PlacementStrategy,
    pub node_limit: usize,
    pub center: [f64; 3],
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            base_size: 2.0,
            scale_factor: None,
            strategy: PlacementStrategy::default(),
            node_limit: DEFAULT_NODE_LIMIT,
            center: [0.0; 3],
        }
    }
}

impl FractalConfig {
    /// Root center as a vector
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.center[0], self.center[1], self.center[2])
    }
}

/// Number of nodes a strategy produces over `levels` levels
///
/// Saturates at `usize::MAX` instead of overflowing, so absurd depths still
/// compare cleanly against a node limit.
pub fn expected_node_count(strategy: &PlacementStrategy, levels: u32) -> usize {
    if levels == 0 {
        return 0;
    }

    match strategy {
        PlacementStrategy::Grid { grid_size, .. } => {
            let cells = (*grid_size as usize).saturating_pow(3);
            if levels >= 2 {
                cells.saturating_mul(2)
            } else {
                cells
            }
        }
        _ => {
            let mut total = 0usize;
            let mut level_nodes = 1usize;
            for _ in 0..levels {
                total = total.saturating_add(level_nodes);
                if total == usize::MAX {
                    break;
                }
                level_nodes = level_nodes.saturating_mul(OCTANTS.len());
            }
            total
        }
    }
}

/// Builds [`FractalTree`]s for one placement strategy
#[derive(Clone, Debug, PartialEq)]
pub struct FractalGenerator {
    strategy: PlacementStrategy,
    scale_factor: Option<f64>,
    max_depth: u32,
    node_limit: usize,
}

impl FractalGenerator {
    /// Create a generator with the strategy's default scale, 3 levels and the default node limit
    pub fn new(strategy: PlacementStrategy) -> Self {
        Self {
            strategy,
            scale_factor: None,
            max_depth: 3,
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }

    /// Create a generator from a config section
    pub fn from_config(config: &FractalConfig) -> Self {
        Self {
            strategy: config.strategy,
            scale_factor: config.scale_factor,
            max_depth: config.max_depth,
            node_limit: config.node_limit,
        }
    }

    /// Set the child-to-parent size ratio
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    /// Set the deepest level (the root is level 1)
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the node ceiling
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit;
        self
    }

    #[inline]
    pub fn strategy(&self) -> &PlacementStrategy {
        &self.strategy
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn node_limit(&self) -> usize {
        self.node_limit
    }

    /// Effective scale factor
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
            .unwrap_or_else(|| self.strategy.default_scale_factor())
    }

    /// Check every precondition for a build starting at `depth` with root `size`
    ///
    /// Returns the number of nodes the build would create.
    pub fn validate(&self, depth: u32, size: f64) -> Result<usize, FractalError> {
        if self.node_limit > MAX_NODE_LIMIT {
            return Err(FractalError::InvalidNodeLimit {
                limit: self.node_limit,
                max: MAX_NODE_LIMIT,
            });
        }
        if self.max_depth < 1 {
            return Err(FractalError::InvalidMaxDepth(self.max_depth));
        }
        if depth < 1 || depth > self.max_depth {
            return Err(FractalError::InvalidDepth {
                depth,
                max_depth: self.max_depth,
            });
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(FractalError::InvalidSize(size));
        }

        let scale = self.scale_factor();
        if !scale.is_finite() || scale <= 0.0 || scale >= 1.0 {
            return Err(FractalError::InvalidScaleFactor(scale));
        }

        if let PlacementStrategy::Grid { grid_size, spacing } = self.strategy {
            if grid_size < 1 || !spacing.is_finite() || spacing <= 0.0 {
                return Err(FractalError::InvalidGrid { grid_size, spacing });
            }
        }

        let requested = expected_node_count(&self.strategy, self.max_depth - depth + 1);
        if requested > self.node_limit {
            return Err(FractalError::NodeLimitExceeded {
                requested,
                limit: self.node_limit,
            });
        }
        Ok(requested)
    }

    /// Generate a tree whose top level sits at `depth` with edge length `size`
    pub fn generate(&self, depth: u32, size: f64, center: Vec3) -> Result<FractalTree, FractalError> {
        let expected = self.validate(depth, size)?;

        let mut build = Build {
            nodes: SlotMap::with_capacity_and_key(expected),
            strategy: self.strategy,
            scale: self.scale_factor(),
            max_depth: self.max_depth,
        };

        let roots = match self.strategy {
            PlacementStrategy::Grid { grid_size, spacing } => {
                build.grid(depth, size, center, grid_size, spacing)
            }
            PlacementStrategy::GoldenSpiral => {
                vec![build.node(None, depth, size, Vec3::ZERO, center, NodeFlags::PATH)]
            }
            _ => vec![build.node(None, depth, size, Vec3::ZERO, center, NodeFlags::empty())],
        };

        let tree = FractalTree {
            nodes: build.nodes,
            roots,
            strategy: self.strategy,
            scale_factor: build.scale,
            max_depth: self.max_depth,
        };

        log::debug!(
            "Generated {} fractal: {} nodes, {} roots, levels {}..={}",
            self.strategy.name(),
            tree.len(),
            tree.roots().len(),
            depth,
            self.max_depth
        );
        Ok(tree)
    }
}

/// Generate the fractal a config section describes, rooted at depth 1
pub fn generate_fractal(config: &FractalConfig) -> Result<FractalTree, FractalError> {
    FractalGenerator::from_config(config).generate(1, config.base_size, config.center())
}

/// Arena being filled by one `generate` call
struct Build {
    nodes: SlotMap<NodeKey, FractalNode>,
    strategy: PlacementStrategy,
    scale: f64,
    max_depth: u32,
}

impl Build {
    /// Insert a node and, recursively, its subtree
    fn node(
        &mut self,
        parent: Option<NodeKey>,
        depth: u32,
        size: f64,
        offset: Vec3,
        center: Vec3,
        mut flags: NodeFlags,
    ) -> NodeKey {
        let has_children = depth < self.max_depth;
        if !has_children {
            flags |= NodeFlags::LEAF;
        }

        let key = self.nodes.insert(FractalNode {
            depth,
            size,
            offset,
            center,
            parent,
            children: Vec::new(),
            flags,
            lattice: None,
        });

        if has_children {
            let children = self.octant_children(key, depth, size, center, flags.contains(NodeFlags::PATH));
            if let Some(node) = self.nodes.get_mut(key) {
                node.children = children;
            }
        }
        key
    }

    /// The 8 children of a recursive node
    fn octant_children(
        &mut self,
        parent: NodeKey,
        depth: u32,
        size: f64,
        center: Vec3,
        parent_on_path: bool,
    ) -> Vec<NodeKey> {
        let child_size = size * self.scale;
        let distance = self.strategy.child_offset(size, child_size);

        let mut signs = Vec::with_capacity(OCTANTS.len());
        let path_sign = match self.strategy {
            PlacementStrategy::GoldenSpiral => {
                let dir = golden_direction(depth);
                signs.push(dir);
                Some(dir)
            }
            _ => None,
        };
        signs.extend(OCTANTS.iter().copied().filter(|s| Some(*s) != path_sign));

        signs
            .into_iter()
            .map(|sign| {
                let offset = sign * distance;
                let flags = if parent_on_path && Some(sign) == path_sign {
                    NodeFlags::PATH
                } else {
                    NodeFlags::empty()
                };
                self.node(Some(parent), depth + 1, child_size, offset, center + offset, flags)
            })
            .collect()
    }

    /// `grid_size³` cells in x-major order, each with an optional inner cube
    fn grid(&mut self, depth: u32, size: f64, center: Vec3, grid_size: u32, spacing: f64) -> Vec<NodeKey> {
        let half_extent = (grid_size - 1) as f64 * spacing / 2.0;
        let mid = (grid_size - 1) as f64 / 2.0;
        let max_distance = 3f64.sqrt() * grid_size as f64 / 2.0;
        let with_inner = depth < self.max_depth;

        let mut roots = Vec::with_capacity((grid_size as usize).pow(3));
        for i in 0..grid_size {
            for j in 0..grid_size {
                for k in 0..grid_size {
                    let index = Vec3::new(i as f64, j as f64, k as f64);
                    let offset = index * spacing - Vec3::splat(half_extent);
                    let cell_center = center + offset;
                    let distance_from_center = (index - Vec3::splat(mid)).length() / max_distance;

                    let key = self.nodes.insert(FractalNode {
                        depth,
                        size,
                        offset,
                        center: cell_center,
                        parent: None,
                        children: Vec::new(),
                        flags: if with_inner { NodeFlags::empty() } else { NodeFlags::LEAF },
                        lattice: Some(LatticeCell {
                            index: [i, j, k],
                            distance_from_center,
                        }),
                    });

                    if with_inner {
                        let inner = self.nodes.insert(FractalNode {
                            depth: depth + 1,
                            size: size * self.scale,
                            offset: Vec3::ZERO,
                            center: cell_center,
                            parent: Some(key),
                            children: Vec::new(),
                            flags: NodeFlags::INNER | NodeFlags::LEAF,
                            lattice: None,
                        });
                        if let Some(cell) = self.nodes.get_mut(key) {
                            cell.children.push(inner);
                        }
                    }
                    roots.push(key);
                }
            }
        }
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < EPSILON
    }

    #[test]
    fn test_outward_root_with_eight_corner_children() {
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantOutward)
            .with_max_depth(2)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();

        assert_eq!(tree.len(), 9);
        assert_eq!(tree.roots().len(), 1);
        let root_key = tree.roots()[0];
        let root = tree.get(root_key).unwrap();
        assert_eq!(root.size, 2.0);
        assert_eq!(root.center, Vec3::ZERO);
        assert_eq!(root.depth, 1);
        assert_eq!(root.children.len(), 8);

        for (child, sign) in tree.children(root_key).zip(OCTANTS) {
            assert!(approx_eq(child.size, 1.0));
            assert!(vec_approx_eq(child.center, sign));
            assert_eq!(child.parent, Some(root_key));
            assert!(child.is_leaf());
            assert!(child.flags.contains(NodeFlags::LEAF));
        }
    }

    #[test]
    fn test_octant_counts() {
        for (max_depth, count) in [(1, 1), (2, 9), (3, 73)] {
            for strategy in [
                PlacementStrategy::CornerOctantOutward,
                PlacementStrategy::CornerOctantInward,
                PlacementStrategy::GoldenSpiral,
            ] {
                let tree = FractalGenerator::new(strategy)
                    .with_max_depth(max_depth)
                    .generate(1, 2.0, Vec3::ZERO)
                    .unwrap();
                assert_eq!(tree.len(), count, "{} at depth {}", strategy.name(), max_depth);
                assert_eq!(expected_node_count(&strategy, max_depth), count);
            }
        }
    }

    #[test]
    fn test_count_by_depth() {
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantInward)
            .with_max_depth(3)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();
        let counts = tree.count_by_depth();
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&2), Some(&8));
        assert_eq!(counts.get(&3), Some(&64));
        assert_eq!(tree.leaves().count(), 64);
    }

    #[test]
    fn test_sizes_shrink_with_depth() {
        for strategy in [
            PlacementStrategy::CornerOctantOutward,
            PlacementStrategy::CornerOctantInward,
            PlacementStrategy::GoldenSpiral,
            PlacementStrategy::Grid { grid_size: 3, spacing: 0.7 },
        ] {
            let tree = FractalGenerator::new(strategy)
                .with_max_depth(4)
                .generate(1, 2.0, Vec3::ZERO)
                .unwrap();
            for (_, node) in tree.iter() {
                if let Some(parent) = node.parent.and_then(|p| tree.get(p)) {
                    assert!(node.size < parent.size);
                    assert!(
                        approx_eq(node.size, parent.size * tree.scale_factor()),
                        "{}: child {} under parent {}",
                        strategy.name(),
                        node.size,
                        parent.size
                    );
                    assert_eq!(node.depth, parent.depth + 1);
                }
            }
        }
    }

    #[test]
    fn test_inward_children_stay_inside_parent() {
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantInward)
            .with_max_depth(2)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();
        for child in tree.children(tree.roots()[0]) {
            assert!(approx_eq(child.size, 1.0));
            assert!(approx_eq(child.center.x.abs(), 0.5));
            assert!(approx_eq(child.center.y.abs(), 0.5));
            assert!(approx_eq(child.center.z.abs(), 0.5));
        }
    }

    #[test]
    fn test_offsets_are_parent_relative() {
        let center = Vec3::new(3.0, -1.0, 2.0);
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantOutward)
            .with_max_depth(3)
            .generate(1, 2.0, center)
            .unwrap();
        assert_eq!(tree.root().unwrap().center, center);
        for (_, node) in tree.iter() {
            if let Some(parent) = node.parent.and_then(|p| tree.get(p)) {
                assert!(vec_approx_eq(node.center, parent.center + node.offset));
            }
        }
    }

    #[test]
    fn test_iter_is_pre_order() {
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantOutward)
            .with_max_depth(3)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();
        let order: Vec<u32> = tree.iter().map(|(_, n)| n.depth).collect();
        assert_eq!(order.len(), 73);
        assert_eq!(&order[..4], &[1, 2, 3, 3]);
        // First child's subtree (1 + 8) comes before the second child
        assert_eq!(order[10], 2);
    }

    #[test]
    fn test_golden_spiral_has_one_path_node_per_level() {
        let max_depth = 5;
        let tree = FractalGenerator::new(PlacementStrategy::GoldenSpiral)
            .with_max_depth(max_depth)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();

        assert_eq!(tree.path_node_count(), max_depth as usize);
        let keys = tree.spiral_path_keys();
        assert_eq!(keys.len(), max_depth as usize);

        for (level, pair) in keys.windows(2).enumerate() {
            let parent = tree.get(pair[0]).unwrap();
            let child = tree.get(pair[1]).unwrap();
            assert_eq!(parent.depth, level as u32 + 1);
            assert_eq!(child.parent, Some(pair[0]));
            // The path child is generated first
            assert_eq!(parent.children[0], pair[1]);
            let expected = golden_direction(parent.depth) * (child.size / 2.0);
            assert!(vec_approx_eq(child.offset, expected));
        }
    }

    #[test]
    fn test_golden_spiral_curve() {
        let tree = FractalGenerator::new(PlacementStrategy::GoldenSpiral)
            .with_max_depth(4)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();
        let path = tree.spiral_path();
        let curve = tree.spiral_curve(200);
        assert_eq!(curve.len(), 201);
        assert!(vec_approx_eq(curve[0], path[0]));
        assert!(vec_approx_eq(curve[200], path[3]));
    }

    #[test]
    fn test_non_spiral_trees_have_no_path() {
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantInward)
            .with_max_depth(3)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();
        assert_eq!(tree.path_node_count(), 0);
        assert!(tree.spiral_path().is_empty());

        let grid = FractalGenerator::new(PlacementStrategy::Grid { grid_size: 2, spacing: 1.0 })
            .generate(1, 0.5, Vec3::ZERO)
            .unwrap();
        assert_eq!(grid.path_node_count(), 0);
        assert!(grid.spiral_path().is_empty());
        assert!(grid.spiral_curve(10).is_empty());
    }

    #[test]
    fn test_grid_cells_and_inner_cubes() {
        let strategy = PlacementStrategy::Grid { grid_size: 2, spacing: 1.0 };
        let tree = FractalGenerator::new(strategy)
            .with_max_depth(2)
            .generate(1, 0.5, Vec3::ZERO)
            .unwrap();

        assert_eq!(tree.roots().len(), 8);
        assert_eq!(tree.len(), 16);
        assert_eq!(expected_node_count(&strategy, 2), 16);

        for key in tree.roots() {
            let cell = tree.get(*key).unwrap();
            assert!(approx_eq(cell.size, 0.5));
            assert!(approx_eq(cell.center.x.abs(), 0.5));
            assert!(approx_eq(cell.center.y.abs(), 0.5));
            assert!(approx_eq(cell.center.z.abs(), 0.5));
            assert_eq!(cell.children.len(), 1);

            let inner = tree.get(cell.children[0]).unwrap();
            assert!(inner.is_inner());
            assert!(inner.is_leaf());
            assert!(approx_eq(inner.size, 0.25));
            assert_eq!(inner.center, cell.center);
        }
    }

    #[test]
    fn test_grid_never_nests_deeper_than_one() {
        let strategy = PlacementStrategy::Grid { grid_size: 3, spacing: 0.7 };
        let tree = FractalGenerator::new(strategy)
            .with_max_depth(5)
            .generate(1, 0.5, Vec3::ZERO)
            .unwrap();
        assert_eq!(tree.len(), 54);
        assert_eq!(tree.max_depth(), 5);
        assert_eq!(*tree.count_by_depth().keys().last().unwrap(), 2);

        let flat = FractalGenerator::new(strategy)
            .with_max_depth(1)
            .generate(1, 0.5, Vec3::ZERO)
            .unwrap();
        assert_eq!(flat.len(), 27);
        assert!(flat.iter().all(|(_, n)| n.is_leaf() && !n.is_inner()));
    }

    #[test]
    fn test_grid_lattice_distance() {
        let tree = FractalGenerator::new(PlacementStrategy::Grid { grid_size: 3, spacing: 0.7 })
            .generate(1, 0.5, Vec3::ZERO)
            .unwrap();

        let center_cell = tree
            .roots()
            .iter()
            .filter_map(|k| tree.get(*k))
            .find(|n| n.lattice.map(|l| l.index) == Some([1, 1, 1]))
            .unwrap();
        assert!(vec_approx_eq(center_cell.center, Vec3::ZERO));
        assert!(approx_eq(center_cell.lattice.unwrap().distance_from_center, 0.0));

        let corner = tree.get(tree.roots()[0]).unwrap();
        let lattice = corner.lattice.unwrap();
        assert_eq!(lattice.index, [0, 0, 0]);
        assert!(vec_approx_eq(corner.center, Vec3::splat(-0.7)));
        // sqrt(3) / (sqrt(3) * 3 / 2)
        assert!(approx_eq(lattice.distance_from_center, 2.0 / 3.0));
    }

    #[test]
    fn test_default_limit_admits_depth_six() {
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantInward)
            .with_max_depth(6)
            .generate(1, 2.0, Vec3::ZERO)
            .unwrap();
        assert_eq!(tree.len(), 37_449);
    }

    #[test]
    fn test_depth_ten_is_rejected() {
        let result = FractalGenerator::new(PlacementStrategy::CornerOctantOutward)
            .with_max_depth(10)
            .generate(1, 2.0, Vec3::ZERO);
        assert_eq!(
            result.unwrap_err(),
            FractalError::NodeLimitExceeded {
                requested: 153_391_689,
                limit: DEFAULT_NODE_LIMIT,
            }
        );
    }

    #[test]
    fn test_node_count_saturates() {
        assert_eq!(expected_node_count(&PlacementStrategy::GoldenSpiral, 0), 0);
        assert_eq!(expected_node_count(&PlacementStrategy::GoldenSpiral, 100), usize::MAX);
        let huge = PlacementStrategy::Grid { grid_size: u32::MAX, spacing: 1.0 };
        assert_eq!(expected_node_count(&huge, 2), usize::MAX);
    }

    #[test]
    fn test_custom_limit() {
        let gen = FractalGenerator::new(PlacementStrategy::CornerOctantOutward)
            .with_max_depth(3)
            .with_node_limit(72);
        assert!(matches!(
            gen.generate(1, 2.0, Vec3::ZERO),
            Err(FractalError::NodeLimitExceeded { requested: 73, limit: 72 })
        ));
        assert_eq!(gen.with_node_limit(73).validate(1, 2.0), Ok(73));
    }

    #[test]
    fn test_node_limit_ceiling() {
        let gen = FractalGenerator::new(PlacementStrategy::CornerOctantOutward)
            .with_max_depth(21)
            .with_node_limit(9_000_000_000_000_000_000);
        let expected = Err(FractalError::InvalidNodeLimit {
            limit: 9_000_000_000_000_000_000,
            max: MAX_NODE_LIMIT,
        });
        assert_eq!(gen.validate(1, 2.0), expected);
        assert!(matches!(
            gen.generate(1, 2.0, Vec3::ZERO),
            Err(FractalError::InvalidNodeLimit { .. })
        ));

        // At the ceiling, an oversized tree is still refused by count
        let gen = gen.with_node_limit(MAX_NODE_LIMIT);
        assert!(matches!(
            gen.validate(1, 2.0),
            Err(FractalError::NodeLimitExceeded { limit: MAX_NODE_LIMIT, .. })
        ));
    }

    #[test]
    fn test_starting_depth_shortens_tree() {
        let tree = FractalGenerator::new(PlacementStrategy::CornerOctantOutward)
            .with_max_depth(3)
            .generate(2, 1.0, Vec3::ZERO)
            .unwrap();
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.root().unwrap().depth, 2);
    }

    #[test]
    fn test_preconditions() {
        let gen = FractalGenerator::new(PlacementStrategy::CornerOctantOutward);
        assert_eq!(
            gen.clone().with_max_depth(0).validate(1, 2.0),
            Err(FractalError::InvalidMaxDepth(0))
        );
        assert_eq!(
            gen.validate(0, 2.0),
            Err(FractalError::InvalidDepth { depth: 0, max_depth: 3 })
        );
        assert_eq!(
            gen.validate(4, 2.0),
            Err(FractalError::InvalidDepth { depth: 4, max_depth: 3 })
        );
        assert_eq!(gen.validate(1, 0.0), Err(FractalError::InvalidSize(0.0)));
        assert!(matches!(gen.validate(1, f64::NAN), Err(FractalError::InvalidSize(_))));
        assert!(matches!(gen.validate(1, f64::INFINITY), Err(FractalError::InvalidSize(_))));
        for bad in [0.0, 1.0, 1.5, -0.5] {
            assert_eq!(
                gen.clone().with_scale_factor(bad).validate(1, 2.0),
                Err(FractalError::InvalidScaleFactor(bad))
            );
        }

        let grid = FractalGenerator::new(PlacementStrategy::Grid { grid_size: 0, spacing: 0.7 });
        assert!(matches!(grid.validate(1, 0.5), Err(FractalError::InvalidGrid { .. })));
        let grid = FractalGenerator::new(PlacementStrategy::Grid { grid_size: 2, spacing: -1.0 });
        assert!(matches!(grid.validate(1, 0.5), Err(FractalError::InvalidGrid { .. })));
    }

    #[test]
    fn test_generate_fractal_from_config() {
        let config = FractalConfig {
            max_depth: 2,
            strategy: PlacementStrategy::GoldenSpiral,
            center: [1.0, 0.0, 0.0],
            ..Default::default()
        };
        let tree = generate_fractal(&config).unwrap();
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.root().unwrap().center, Vec3::new(1.0, 0.0, 0.0));
        assert!(approx_eq(tree.scale_factor(), PlacementStrategy::GoldenSpiral.default_scale_factor()));
    }

    #[test]
    fn test_config_from_toml() {
        let config: FractalConfig = toml::from_str(
            r#"
            max_depth = 4
            scale_factor = 0.4
            strategy = { type = "corner-octant-inward" }
            "#,
        )
        .unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.scale_factor, Some(0.4));
        assert_eq!(config.strategy, PlacementStrategy::CornerOctantInward);
        assert_eq!(config.base_size, 2.0);
        assert_eq!(config.node_limit, DEFAULT_NODE_LIMIT);
    }
}
