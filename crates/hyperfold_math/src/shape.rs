//! Edge primitive and the wire-shape trait
//!
//! Shapes are pure geometric data: 4D vertices plus an edge list. Colors are
//! reduced to a small per-edge tag the host maps to whatever palette it uses.

use crate::Vec4;

/// An unordered pair of vertex indices, tagged for coloring
///
/// The tag is free-form; the built-in shapes use the axis index of the edge
/// direction (0=X, 1=Y, 2=Z, 3=W) and [`CONNECTOR_TAG`] for struts between
/// nested shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Indices into the parent shape's vertex array
    pub indices: [usize; 2],
    /// Color/axis tag
    pub tag: u8,
}

/// Tag for edges joining an outer shape to an inner one
pub const CONNECTOR_TAG: u8 = 4;

impl Edge {
    /// Create a new edge between vertices `a` and `b`
    #[inline]
    pub fn new(a: usize, b: usize, tag: u8) -> Self {
        Self { indices: [a, b], tag }
    }

    /// Get the indices as a sorted pair (canonical form)
    ///
    /// Edges are unordered; compare canonical forms for equality.
    pub fn canonical(&self) -> [usize; 2] {
        let [a, b] = self.indices;
        if a <= b { [a, b] } else { [b, a] }
    }
}

/// Trait for 4D shapes drawn as line segments
pub trait WireShape4D {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec4];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Largest |w| over all vertices
    fn max_abs_w(&self) -> f64 {
        self.vertices().iter().fold(0.0, |m, v| m.max(v.w.abs()))
    }

    /// Largest 4D norm over all vertices
    ///
    /// Any rotation keeps |w| at or below this value.
    fn max_norm(&self) -> f64 {
        self.vertices().iter().fold(0.0, |m, v| m.max(v.length()))
    }
}
