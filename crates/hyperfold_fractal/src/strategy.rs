//! Placement strategies
//!
//! A strategy decides where the children of a cube go. Octant offsets are
//! always enumerated in the same order (−−−, −−+, −+−, −++, +−−, +−+, ++−, +++)
//! so generated trees are deterministic.

use hyperfold_math::Vec3;
use serde::{Serialize, Deserialize};

/// Golden ratio φ
pub const PHI: f64 = 1.618_033_988_749_895;

/// The 8 octant sign combinations, in generation order
pub const OCTANTS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Rule for placing child cubes
///
/// Serialized with a `type` tag, e.g. `{ type = "golden-spiral" }` or
/// `{ type = "grid", grid_size = 6, spacing = 0.7 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PlacementStrategy {
    /// 8 children centered on the parent's corners (offset `size/2`)
    #[default]
    CornerOctantOutward,
    /// 8 children subdividing the parent's volume (offset `childSize/2`)
    CornerOctantInward,
    /// Inward octants with one path child per level spiralling by `depth mod 3`
    GoldenSpiral,
    /// A flat `grid_size³` lattice, each cell holding at most one inner cube
    Grid {
        grid_size: u32,
        spacing: f64,
    },
}

impl PlacementStrategy {
    /// Scale factor used when none is configured
    pub fn default_scale_factor(&self) -> f64 {
        match self {
            PlacementStrategy::GoldenSpiral => 1.0 / PHI,
            _ => 0.5,
        }
    }

    /// Distance from parent center to each child center along every axis
    pub fn child_offset(&self, size: f64, child_size: f64) -> f64 {
        match self {
            PlacementStrategy::CornerOctantOutward => size / 2.0,
            _ => child_size / 2.0,
        }
    }

    /// Whether children are generated recursively (every strategy but the grid)
    pub fn is_recursive(&self) -> bool {
        !matches!(self, PlacementStrategy::Grid { .. })
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            PlacementStrategy::CornerOctantOutward => "corner-octant-outward",
            PlacementStrategy::CornerOctantInward => "corner-octant-inward",
            PlacementStrategy::GoldenSpiral => "golden-spiral",
            PlacementStrategy::Grid { .. } => "grid",
        }
    }
}

/// Octant sign of the spiral path child below a node at `depth`
///
/// Cycles through three diagonals: `depth mod 3` of 0 → (+,−,−),
/// 1 → (−,+,−), 2 → (−,−,+).
pub fn golden_direction(depth: u32) -> Vec3 {
    match depth % 3 {
        0 => Vec3::new(1.0, -1.0, -1.0),
        1 => Vec3::new(-1.0, 1.0, -1.0),
        _ => Vec3::new(-1.0, -1.0, 1.0),
    }
}
