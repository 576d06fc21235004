//! Fractal generation errors
//!
//! Every error is raised before the first node is allocated, so a failed
//! build never leaves a partial tree behind.

use std::fmt;

/// Error type for fractal generation
#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    /// Maximum depth below 1
    InvalidMaxDepth(u32),
    /// Starting depth outside `1..=max_depth`
    InvalidDepth { depth: u32, max_depth: u32 },
    /// Root size not finite and positive
    InvalidSize(f64),
    /// Scale factor not finite or outside (0, 1)
    InvalidScaleFactor(f64),
    /// Grid with no cells or a non-positive spacing
    InvalidGrid { grid_size: u32, spacing: f64 },
    /// The requested tree would exceed the node ceiling
    NodeLimitExceeded { requested: usize, limit: usize },
    /// Configured node ceiling above the hard maximum
    InvalidNodeLimit { limit: usize, max: usize },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractalError::InvalidMaxDepth(d) => {
                write!(f, "Invalid max depth: {} (must be at least 1)", d)
            }
            FractalError::InvalidDepth { depth, max_depth } => write!(
                f,
                "Invalid starting depth: {} (must be within 1..={})",
                depth, max_depth
            ),
            FractalError::InvalidSize(size) => {
                write!(f, "Invalid size: {} (must be finite and > 0)", size)
            }
            FractalError::InvalidScaleFactor(s) => {
                write!(f, "Invalid scale factor: {} (must be within (0, 1))", s)
            }
            FractalError::InvalidGrid { grid_size, spacing } => write!(
                f,
                "Invalid grid: size {} spacing {} (need size >= 1 and spacing > 0)",
                grid_size, spacing
            ),
            FractalError::NodeLimitExceeded { requested, limit } => write!(
                f,
                "Fractal would create {} nodes, over the limit of {}",
                requested, limit
            ),
            FractalError::InvalidNodeLimit { limit, max } => {
                write!(f, "Invalid node limit: {} (must be at most {})", limit, max)
            }
        }
    }
}

impl std::error::Error for FractalError {}
