//! The 4D wireframe being projected each frame

use std::f64::consts::PI;

use hyperfold_math::{
    breathing_size, nested_tesseract, ProjectedFrame, ProjectionError, Projector, Tesseract4D,
    WireShape4D, Wireframe4D,
};

use crate::config::{AnimationConfig, ProjectionConfig, WireShapeKind};
use crate::systems::SimulationState;

/// Breathing range of the nested tesseract's shells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breathing {
    pub min: f64,
    pub max: f64,
}

/// A wireframe, its projector, and how it animates
#[derive(Clone, Debug)]
pub struct WireScene {
    kind: WireShapeKind,
    wireframe: Wireframe4D,
    projector: Projector,
    breathing: Breathing,
}

impl WireScene {
    /// Build the configured shape and check it clears the viewer
    pub fn from_config(
        projection: &ProjectionConfig,
        animation: &AnimationConfig,
    ) -> Result<Self, ProjectionError> {
        let projector = projection.to_projector()?;
        let breathing = Breathing {
            min: animation.breathing_min,
            max: animation.breathing_max,
        };
        let wireframe = match projection.shape {
            WireShapeKind::Tesseract => {
                Wireframe4D::from_shape(&Tesseract4D::new(projection.tesseract_size))
            }
            WireShapeKind::NestedTesseract => nested_tesseract(breathing.max, breathing.min),
        };

        // The nested shells start at their widest
        let max_abs_w = projector.check_clearance(&wireframe)?;
        log::info!(
            "Projecting {:?}: {} vertices, {} edges, max |w| {:.3} at viewer distance {}",
            projection.shape,
            wireframe.vertex_count(),
            wireframe.edge_count(),
            max_abs_w,
            projector.viewer_distance()
        );

        Ok(Self {
            kind: projection.shape,
            wireframe,
            projector,
            breathing,
        })
    }

    pub fn kind(&self) -> WireShapeKind {
        self.kind
    }

    pub fn wireframe(&self) -> &Wireframe4D {
        &self.wireframe
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Rotate and project the shape for `state`
    ///
    /// The nested tesseract first resizes its shells: outer and inner breathe
    /// half a cycle apart.
    pub fn frame(&mut self, state: &SimulationState) -> Result<ProjectedFrame, ProjectionError> {
        if self.kind == WireShapeKind::NestedTesseract {
            let Breathing { min, max } = self.breathing;
            let outer = breathing_size(state.elapsed, min, max, 0.0);
            let inner = breathing_size(state.elapsed, min, max, PI);
            self.wireframe = nested_tesseract(outer, inner);
        }
        self.projector.project_edges(&self.wireframe, &state.rotation)
    }
}
