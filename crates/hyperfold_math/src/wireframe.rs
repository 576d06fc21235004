//! Validated vertex/edge sets
//!
//! [`Wireframe4D`] owns an arbitrary vertex list and edge list and checks on
//! construction that every edge references two distinct, existing vertices.

use std::fmt;

use crate::{Vec4, Tesseract4D, shape::{Edge, WireShape4D, CONNECTOR_TAG}};

/// Error building a wireframe from raw parts
#[derive(Debug, Clone, PartialEq)]
pub enum WireframeError {
    /// An edge references a vertex index past the end of the vertex list
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
    /// An edge joins a vertex to itself
    DegenerateEdge { edge: usize, index: usize },
}

impl fmt::Display for WireframeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireframeError::EdgeOutOfRange { edge, index, vertex_count } => write!(
                f,
                "Edge {} references vertex {} but only {} vertices exist",
                edge, index, vertex_count
            ),
            WireframeError::DegenerateEdge { edge, index } => {
                write!(f, "Edge {} joins vertex {} to itself", edge, index)
            }
        }
    }
}

impl std::error::Error for WireframeError {}

/// Check every edge against a vertex count
pub fn validate_edges(edges: &[Edge], vertex_count: usize) -> Result<(), WireframeError> {
    for (i, e) in edges.iter().enumerate() {
        let [a, b] = e.indices;
        for index in [a, b] {
            if index >= vertex_count {
                return Err(WireframeError::EdgeOutOfRange { edge: i, index, vertex_count });
            }
        }
        if a == b {
            return Err(WireframeError::DegenerateEdge { edge: i, index: a });
        }
    }
    Ok(())
}

/// A 4D line drawing with validated edges
#[derive(Clone, Debug, Default)]
pub struct Wireframe4D {
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
}

impl Wireframe4D {
    /// Create a wireframe, rejecting edges with invalid indices
    pub fn new(vertices: Vec<Vec4>, edges: Vec<Edge>) -> Result<Self, WireframeError> {
        validate_edges(&edges, vertices.len())?;
        Ok(Self { vertices, edges })
    }

    /// Copy any wire shape into an owned wireframe
    pub fn from_shape(shape: &dyn WireShape4D) -> Self {
        Self {
            vertices: shape.vertices().to_vec(),
            edges: shape.edges().to_vec(),
        }
    }
}

impl WireShape4D for Wireframe4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// A tesseract inside a tesseract
///
/// Vertices 0..16 form the outer tesseract (half-extent `outer_half`) and
/// 16..32 the inner one (`inner_half`), both binary-indexed. Each contributes
/// its 32 axis-tagged edges; corner `i` of the outer shape is joined to corner
/// `i` of the inner one by a [`CONNECTOR_TAG`] edge.
pub fn nested_tesseract(outer_half: f64, inner_half: f64) -> Wireframe4D {
    let mut vertices = Vec::with_capacity(32);
    vertices.extend((0..16).map(|i| Tesseract4D::corner(i, outer_half)));
    vertices.extend((0..16).map(|i| Tesseract4D::corner(i, inner_half)));

    let mut edges = Tesseract4D::compute_edges(0);
    edges.extend(Tesseract4D::compute_edges(16));
    edges.extend((0..16).map(|i| Edge::new(i, 16 + i, CONNECTOR_TAG)));

    Wireframe4D { vertices, edges }
}

/// Oscillating half-extent between `min` and `max`
///
/// `((sin(t + phase) + 1)·(max − min))/2 + min`. Phases π apart breathe in
/// opposition, which is how the nested tesseract swaps its inner and outer shells.
pub fn breathing_size(t: f64, min: f64, max: f64, phase: f64) -> f64 {
    ((t + phase).sin() + 1.0) * (max - min) / 2.0 + min
}
