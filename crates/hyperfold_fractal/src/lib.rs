//! Recursive cube fractals for hyperfold
//!
//! This crate builds fractal structures as arena trees, including:
//! - Corner-octant subdivision, outward and inward
//! - The golden-ratio spiral with its smoothed path curve
//! - A flat grid of cells with inner cubes
//! - A node-count guard that rejects oversized requests before building

pub mod error;
pub mod generator;
pub mod node;
pub mod spline;
pub mod strategy;
pub mod tree;

// Re-export commonly used types
pub use error::FractalError;
pub use generator::{
    expected_node_count, generate_fractal, FractalConfig, FractalGenerator, DEFAULT_NODE_LIMIT,
    MAX_NODE_LIMIT,
};
pub use node::{FractalNode, LatticeCell, NodeFlags, NodeKey};
pub use spline::{catmull_rom_point, catmull_rom_points};
pub use strategy::{golden_direction, PlacementStrategy, OCTANTS, PHI};
pub use tree::{DepthFirst, FractalTree};
