//! 4D to 3D perspective projection
//!
//! A point is pulled towards the origin by `1 / (d - w)`, where `d` is the
//! viewer distance along w. Points with `w` at (or numerically at) `d` sit on
//! the singular plane; they are reported, never turned into ±∞ or NaN.

use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::mat4;
use crate::shape::WireShape4D;
use crate::wireframe::{validate_edges, WireframeError};
use crate::{RotationSpec, Vec3, Vec4};

/// Default viewer distance along w
pub const DEFAULT_VIEWER_DISTANCE: f64 = 2.0;

/// Smallest |d − w| still considered projectable
pub const SINGULARITY_EPSILON: f64 = 1e-9;

/// Projection failure
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// The point lies on the plane `w == viewer_distance`
    Singularity { w: f64, viewer_distance: f64 },
    /// Viewer distance is zero, negative, or not finite
    InvalidViewerDistance(f64),
    /// Some vertex has |w| at or beyond the viewer distance
    InsufficientClearance { max_abs_w: f64, viewer_distance: f64 },
    /// The edge list does not match the vertex list
    Wireframe(WireframeError),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::Singularity { w, viewer_distance } => write!(
                f,
                "Projection singularity: w = {} at viewer distance {}",
                w, viewer_distance
            ),
            ProjectionError::InvalidViewerDistance(d) => {
                write!(f, "Invalid viewer distance: {} (must be finite and > 0)", d)
            }
            ProjectionError::InsufficientClearance { max_abs_w, viewer_distance } => write!(
                f,
                "Viewer distance {} does not clear max |w| = {}",
                viewer_distance, max_abs_w
            ),
            ProjectionError::Wireframe(err) => write!(f, "Invalid wireframe: {}", err),
        }
    }
}

impl std::error::Error for ProjectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjectionError::Wireframe(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WireframeError> for ProjectionError {
    fn from(err: WireframeError) -> Self {
        ProjectionError::Wireframe(err)
    }
}

/// A projected 3D position with the source w kept for coloring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// w of the rotated 4D point before projection
    pub w: f64,
    /// Perspective factor `1 / (d - w)` that was applied
    pub scale: f64,
}

impl ProjectedPoint {
    /// Projected position
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Hue in `[0, 1]` from w, for w spanning `[-extent, extent]`
    pub fn w_hue(&self, extent: f64) -> f64 {
        if extent <= 0.0 {
            return 0.5;
        }
        ((self.w / extent + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// Perspective-project a 4D point at viewer distance `d`
pub fn project(point: Vec4, viewer_distance: f64) -> Result<ProjectedPoint, ProjectionError> {
    project_with_epsilon(point, viewer_distance, SINGULARITY_EPSILON)
}

fn project_with_epsilon(
    point: Vec4,
    viewer_distance: f64,
    epsilon: f64,
) -> Result<ProjectedPoint, ProjectionError> {
    let singular = || ProjectionError::Singularity { w: point.w, viewer_distance };

    let denom = viewer_distance - point.w;
    if !denom.is_finite() || denom.abs() < epsilon {
        return Err(singular());
    }

    let scale = 1.0 / denom;
    let projected = ProjectedPoint {
        x: point.x * scale,
        y: point.y * scale,
        z: point.z * scale,
        w: point.w,
        scale,
    };

    if projected.x.is_finite() && projected.y.is_finite() && projected.z.is_finite() {
        Ok(projected)
    } else {
        Err(singular())
    }
}

/// One edge after projection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedSegment {
    pub start: ProjectedPoint,
    pub end: ProjectedPoint,
    pub tag: u8,
}

/// Vertex layout for uploading projected line lists
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    /// Source w, for color mapping in the shader
    pub w: f32,
    pub tag: u32,
}

impl LineVertex {
    fn from_point(p: &ProjectedPoint, tag: u8) -> Self {
        Self {
            position: p.position().to_f32_array(),
            w: p.w as f32,
            tag: tag as u32,
        }
    }
}

/// All segments of one frame
#[derive(Clone, Debug, Default)]
pub struct ProjectedFrame {
    pub segments: Vec<ProjectedSegment>,
    /// Vertices that hit the singular plane this frame
    pub skipped_vertices: Vec<usize>,
    /// Edges dropped because an endpoint was skipped
    pub skipped_edges: usize,
}

impl ProjectedFrame {
    /// Check whether every edge made it into the frame
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.skipped_edges == 0
    }

    /// Flatten into a line list, two vertices per segment
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        let mut out = Vec::with_capacity(self.segments.len() * 2);
        for s in &self.segments {
            out.push(LineVertex::from_point(&s.start, s.tag));
            out.push(LineVertex::from_point(&s.end, s.tag));
        }
        out
    }
}

/// Rotating perspective projector with a fixed viewer distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    viewer_distance: f64,
    epsilon: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            viewer_distance: DEFAULT_VIEWER_DISTANCE,
            epsilon: SINGULARITY_EPSILON,
        }
    }
}

impl Projector {
    /// Create a projector, rejecting non-positive or non-finite distances
    pub fn new(viewer_distance: f64) -> Result<Self, ProjectionError> {
        if !viewer_distance.is_finite() || viewer_distance <= 0.0 {
            return Err(ProjectionError::InvalidViewerDistance(viewer_distance));
        }
        Ok(Self {
            viewer_distance,
            epsilon: SINGULARITY_EPSILON,
        })
    }

    /// Set the singularity tolerance (builder style)
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    /// Viewer distance along w
    #[inline]
    pub fn viewer_distance(&self) -> f64 {
        self.viewer_distance
    }

    /// Project one already-rotated point
    #[inline]
    pub fn project(&self, point: Vec4) -> Result<ProjectedPoint, ProjectionError> {
        project_with_epsilon(point, self.viewer_distance, self.epsilon)
    }

    /// Check that the viewer distance clears every vertex's |w|
    ///
    /// Returns the max |w| on success. Rotations can swing a vertex up to its
    /// full 4D norm into w; that case is only warned about, since the per-point
    /// guard in [`Self::project_edges`] handles it.
    pub fn check_clearance(&self, shape: &dyn WireShape4D) -> Result<f64, ProjectionError> {
        let max_abs_w = shape.max_abs_w();
        if max_abs_w >= self.viewer_distance {
            return Err(ProjectionError::InsufficientClearance {
                max_abs_w,
                viewer_distance: self.viewer_distance,
            });
        }

        let max_norm = shape.max_norm();
        if max_norm >= self.viewer_distance {
            log::warn!(
                "Vertex norm {:.3} reaches viewer distance {:.3}; some rotations will hit the singular plane",
                max_norm,
                self.viewer_distance
            );
        }

        Ok(max_abs_w)
    }

    /// Rotate and project a wire shape for one frame
    pub fn project_edges(
        &self,
        shape: &dyn WireShape4D,
        spec: &RotationSpec,
    ) -> Result<ProjectedFrame, ProjectionError> {
        self.project_parts(shape.vertices(), shape.edges(), spec)
    }

    fn project_parts(
        &self,
        vertices: &[Vec4],
        edges: &[crate::Edge],
        spec: &RotationSpec,
    ) -> Result<ProjectedFrame, ProjectionError> {
        validate_edges(edges, vertices.len())?;

        // Every vertex is rotated and projected once, however many edges share it
        let rotation = spec.to_matrix();
        let mut skipped_vertices = Vec::new();
        let projected: Vec<Option<ProjectedPoint>> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| match self.project(mat4::transform(rotation, *v)) {
                Ok(p) => Some(p),
                Err(_) => {
                    skipped_vertices.push(i);
                    None
                }
            })
            .collect();

        let mut segments = Vec::with_capacity(edges.len());
        let mut skipped_edges = 0;
        for e in edges {
            let [a, b] = e.indices;
            match (projected[a], projected[b]) {
                (Some(start), Some(end)) => segments.push(ProjectedSegment { start, end, tag: e.tag }),
                _ => skipped_edges += 1,
            }
        }

        if !skipped_vertices.is_empty() {
            log::warn!(
                "Skipped {} singular vertices ({} edges) at viewer distance {}",
                skipped_vertices.len(),
                skipped_edges,
                self.viewer_distance
            );
        }

        Ok(ProjectedFrame {
            segments,
            skipped_vertices,
            skipped_edges,
        })
    }
}

/// Rotate every vertex once, then project each edge
pub fn project_edges(
    vertices: &[Vec4],
    edges: &[crate::Edge],
    spec: &RotationSpec,
    viewer_distance: f64,
) -> Result<ProjectedFrame, ProjectionError> {
    Projector::new(viewer_distance)?.project_parts(vertices, edges, spec)
}
