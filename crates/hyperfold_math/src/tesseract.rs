//! Tesseract (4D Hypercube) wireframe
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w),
//! 32 edges, 24 faces (squares), and 8 cells (cubes).
//!
//! Vertex `i` sets its coordinates from the bits of `i` (bit 0 = x ... bit 3 = w),
//! so two vertices share an edge exactly when their indices differ in one bit.

use crate::{Vec4, shape::{Edge, WireShape4D}};

/// A tesseract (4D hypercube) - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Tesseract4D {
    /// Half the side length
    half_size: f64,
    /// The 16 vertices of the tesseract
    vertices: [Vec4; 16],
    /// The 32 edges, tagged with their axis
    edges: Vec<Edge>,
}

impl Tesseract4D {
    /// Create a new tesseract centered at origin with given size
    ///
    /// # Arguments
    /// * `size` - The full side length of the tesseract
    pub fn new(size: f64) -> Self {
        let h = size * 0.5;
        let vertices = std::array::from_fn(|i| Self::corner(i, h));

        Self {
            half_size: h,
            vertices,
            edges: Self::compute_edges(0),
        }
    }

    /// Get the half-size (half the side length)
    #[inline]
    pub fn half_size(&self) -> f64 {
        self.half_size
    }

    /// Get the full size (side length)
    #[inline]
    pub fn size(&self) -> f64 {
        self.half_size * 2.0
    }

    /// Corner `index` (0..16) of a tesseract with half-extent `h`
    #[inline]
    pub fn corner(index: usize, h: f64) -> Vec4 {
        let sign = |bit: usize| if index & (1 << bit) != 0 { h } else { -h };
        Vec4::new(sign(0), sign(1), sign(2), sign(3))
    }

    /// The 32 one-bit edges, with vertex indices shifted by `base`
    ///
    /// Each edge is tagged with the axis of the differing bit.
    pub fn compute_edges(base: usize) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(32);
        for i in 0usize..16 {
            for axis in 0..4u8 {
                let j = i | (1 << axis);
                if j != i {
                    edges.push(Edge::new(base + i, base + j, axis));
                }
            }
        }
        edges
    }
}

impl WireShape4D for Tesseract4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
