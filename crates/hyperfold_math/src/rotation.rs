//! 4D plane rotations
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! A [`RotationSpec`] holds one angle per plane. Plane rotations do not
//! commute in general, so every spec is applied in one fixed order,
//! [`RotationPlane::CANONICAL_ORDER`]: XY, ZW, XW, YZ, XZ, YW.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};
use crate::Vec4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// XY plane - spin around the Z axis in 3D
    XY,
    /// XZ plane - spin around the Y axis in 3D
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - spin around the X axis in 3D
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All planes, in storage order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The order in which plane rotations are composed
    pub const CANONICAL_ORDER: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::ZW,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::XZ,
        RotationPlane::YW,
    ];

    /// Axis indices (0=X, 1=Y, 2=Z, 3=W) spanning this plane
    ///
    /// The rotation turns the first axis towards the second.
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Slot of this plane in storage order
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether rotations in the two planes commute
    ///
    /// True for the same plane and for planes sharing no axis (XY/ZW, XZ/YW, XW/YZ).
    pub fn commutes_with(self, other: RotationPlane) -> bool {
        if self == other {
            return true;
        }
        let (a1, a2) = self.axes();
        let (b1, b2) = other.axes();
        a1 != b1 && a1 != b2 && a2 != b1 && a2 != b2
    }

    /// Lowercase plane name as used in configuration
    pub fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotate the pair of axes `(a, b)` of `v` by `angle`
#[inline]
fn rotate_in_plane(v: Vec4, plane: RotationPlane, angle: f64) -> Vec4 {
    let (a, b) = plane.axes();
    let (sn, cs) = angle.sin_cos();
    let va = v.axis(a);
    let vb = v.axis(b);

    let mut out = v;
    out.set_axis(a, va * cs - vb * sn);
    out.set_axis(b, va * sn + vb * cs);
    out
}

/// A set of plane angles, one per rotation plane, in radians
///
/// Angles are stored reduced modulo 2π so long-running animations keep
/// full precision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationSpec {
    angles: [f64; 6],
}

impl RotationSpec {
    /// No rotation in any plane
    pub const IDENTITY: Self = Self { angles: [0.0; 6] };

    /// Create an empty spec (identity rotation)
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Spec with a single plane angle
    pub fn single(plane: RotationPlane, angle: f64) -> Self {
        Self::new().with_angle(plane, angle)
    }

    /// Set the angle for a plane (builder style)
    pub fn with_angle(mut self, plane: RotationPlane, angle: f64) -> Self {
        self.set_angle(plane, angle);
        self
    }

    /// Set the angle for a plane, reducing it into `[0, 2π)`
    pub fn set_angle(&mut self, plane: RotationPlane, angle: f64) {
        self.angles[plane.index()] = angle.rem_euclid(TAU);
    }

    /// Angle for a plane in `[0, 2π)`
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f64 {
        self.angles[plane.index()]
    }

    /// Angles derived from per-plane angular velocities at time `t` (seconds)
    pub fn at_time(speeds: &PlaneSpeeds, t: f64) -> Self {
        let mut spec = Self::new();
        for (plane, speed) in speeds.iter() {
            spec.set_angle(plane, speed * t);
        }
        spec
    }

    /// Planes with a non-zero angle, in canonical composition order
    pub fn active_planes(&self) -> impl Iterator<Item = RotationPlane> + '_ {
        RotationPlane::CANONICAL_ORDER
            .into_iter()
            .filter(move |p| self.angle(*p) != 0.0)
    }

    /// Whether every pair of active planes commutes
    ///
    /// When true, applying two specs in sequence equals applying [`Self::combined`].
    pub fn planes_commute(&self) -> bool {
        let active: Vec<RotationPlane> = self.active_planes().collect();
        active.iter().enumerate().all(|(i, a)| {
            active[i + 1..].iter().all(|b| a.commutes_with(*b))
        })
    }

    /// Plane-wise sum of angles
    pub fn combined(&self, other: &Self) -> Self {
        let mut spec = *self;
        for plane in RotationPlane::ALL {
            spec.set_angle(plane, self.angle(plane) + other.angle(plane));
        }
        spec
    }

    /// Apply the plane rotations to a point in canonical order
    pub fn rotate(&self, point: Vec4) -> Vec4 {
        self.active_planes()
            .fold(point, |v, plane| rotate_in_plane(v, plane, self.angle(plane)))
    }

    /// The whole rotation as a single matrix
    pub fn to_matrix(&self) -> Mat4 {
        self.active_planes().fold(mat4::IDENTITY, |m, plane| {
            let (a, b) = plane.axes();
            mat4::mul(mat4::plane_rotation(self.angle(plane), a, b), m)
        })
    }

    /// Matrix applying `self` first, then `next`
    pub fn then(&self, next: &Self) -> Mat4 {
        mat4::mul(next.to_matrix(), self.to_matrix())
    }
}

/// Rotate a 4D point by every plane angle of `spec`, in canonical order
///
/// Total and norm-preserving.
#[inline]
pub fn rotate4d(point: Vec4, spec: &RotationSpec) -> Vec4 {
    spec.rotate(point)
}

/// Angular velocity (radians per second) per rotation plane
///
/// Deserializes from a table such as `{ xy = 0.5, zw = 0.7 }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaneSpeeds(BTreeMap<RotationPlane, f64>);

impl PlaneSpeeds {
    /// No rotation
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the speed for a plane (builder style)
    pub fn with(mut self, plane: RotationPlane, speed: f64) -> Self {
        self.0.insert(plane, speed);
        self
    }

    /// Speed for a plane, zero when unset
    pub fn speed(&self, plane: RotationPlane) -> f64 {
        self.0.get(&plane).copied().unwrap_or(0.0)
    }

    /// Iterate (plane, speed) pairs
    pub fn iter(&self) -> impl Iterator<Item = (RotationPlane, f64)> + '_ {
        self.0.iter().map(|(p, s)| (*p, *s))
    }

    /// Number of planes with a configured speed
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no plane has a configured speed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Single XW rotation at 1 rad/s
    pub fn single_xw() -> Self {
        Self::new().with(RotationPlane::XW, 1.0)
    }

    /// XY at 0.5 rad/s and ZW at 0.7 rad/s (the w-colored tesseract)
    pub fn double_xy_zw() -> Self {
        Self::new()
            .with(RotationPlane::XY, 0.5)
            .with(RotationPlane::ZW, 0.7)
    }

    /// XW at 1 rad/s and YZ at 0.5 rad/s
    pub fn double_xw_yz() -> Self {
        Self::new()
            .with(RotationPlane::XW, 1.0)
            .with(RotationPlane::YZ, 0.5)
    }

    /// Pure 3D tumble leaving w untouched (the nested tesseract)
    pub fn tumble_3d() -> Self {
        Self::new()
            .with(RotationPlane::XZ, 0.5)
            .with(RotationPlane::YZ, 0.3)
            .with(RotationPlane::XY, 0.2)
    }
}
