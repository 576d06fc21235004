//! 4D Mathematics Library
//!
//! This crate provides the vector, rotation and projection types used to
//! animate 4D wireframes.
//!
//! ## Core Types
//!
//! - [`Vec4`] / [`Vec3`] - 4D and 3D points
//! - [`RotationSpec`] - one angle per 4D rotation plane, applied in a fixed order
//! - [`PlaneSpeeds`] - per-plane angular velocities that drive a [`RotationSpec`] over time
//! - [`Mat4`] - 4x4 matrix for composed rotations
//!
//! ## Projection
//!
//! - [`Projector`] - rotates a wire shape and perspective-divides it into 3D
//! - [`ProjectedFrame`] - one frame of projected segments
//!
//! ## Shape Types
//!
//! - [`WireShape4D`] - Trait for 4D shapes drawn as edges
//! - [`Tesseract4D`] - A 4D hypercube
//! - [`Wireframe4D`] - Any validated vertex/edge set

mod vec3;
mod vec4;
pub mod mat4;
pub mod rotation;
pub mod projection;
pub mod shape;
pub mod tesseract;
pub mod wireframe;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat4::Mat4;
pub use rotation::{rotate4d, PlaneSpeeds, RotationPlane, RotationSpec};
pub use projection::{
    project, project_edges, LineVertex, ProjectedFrame, ProjectedPoint, ProjectedSegment,
    ProjectionError, Projector, DEFAULT_VIEWER_DISTANCE, SINGULARITY_EPSILON,
};
pub use shape::{Edge, WireShape4D, CONNECTOR_TAG};
pub use tesseract::Tesseract4D;
pub use wireframe::{breathing_size, nested_tesseract, Wireframe4D, WireframeError};
