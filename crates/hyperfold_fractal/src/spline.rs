//! Centripetal Catmull-Rom spline
//!
//! Smooths the golden-spiral path into a curve. The end segments use
//! reflected phantom points (`2·p0 − p1`) so the curve starts and ends on the
//! first and last control points.

use hyperfold_math::Vec3;

const MIN_KNOT_SPACING: f64 = 1e-4;

/// Cubic `c0 + c1·t + c2·t² + c3·t³` for one coordinate of one segment
struct Cubic {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl Cubic {
    /// Hermite form from endpoints `x1`, `x2` and tangents `t1`, `t2`
    fn hermite(x1: f64, x2: f64, t1: f64, t2: f64) -> Self {
        Self {
            c0: x1,
            c1: t1,
            c2: -3.0 * x1 + 3.0 * x2 - 2.0 * t1 - t2,
            c3: 2.0 * x1 - 2.0 * x2 + t1 + t2,
        }
    }

    /// Non-uniform Catmull-Rom through `x1..x2` with knot spacings `dt0..dt2`
    fn nonuniform(x: [f64; 4], dt0: f64, dt1: f64, dt2: f64) -> Self {
        let [x0, x1, x2, x3] = x;
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    #[inline]
    fn eval(&self, t: f64) -> f64 {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t2 * t
    }
}

/// Point at parameter `t` in `[0, 1]` along the whole curve
pub fn catmull_rom_point(points: &[Vec3], t: f64) -> Option<Vec3> {
    let l = points.len();
    match l {
        0 => return None,
        1 => return Some(points[0]),
        _ => {}
    }

    let p = (l - 1) as f64 * t.clamp(0.0, 1.0);
    let mut seg = p.floor() as usize;
    let mut weight = p - seg as f64;
    if seg >= l - 1 {
        seg = l - 2;
        weight = 1.0;
    }

    let p0 = if seg > 0 { points[seg - 1] } else { points[0] * 2.0 - points[1] };
    let p1 = points[seg];
    let p2 = points[seg + 1];
    let p3 = if seg + 2 < l { points[seg + 2] } else { points[l - 1] * 2.0 - points[l - 2] };

    // Centripetal parameterization: knot spacing is sqrt of the chord length
    let mut dt0 = p0.distance(p1).sqrt();
    let mut dt1 = p1.distance(p2).sqrt();
    let mut dt2 = p2.distance(p3).sqrt();
    if dt1 < MIN_KNOT_SPACING {
        dt1 = 1.0;
    }
    if dt0 < MIN_KNOT_SPACING {
        dt0 = dt1;
    }
    if dt2 < MIN_KNOT_SPACING {
        dt2 = dt1;
    }

    let x = Cubic::nonuniform([p0.x, p1.x, p2.x, p3.x], dt0, dt1, dt2);
    let y = Cubic::nonuniform([p0.y, p1.y, p2.y, p3.y], dt0, dt1, dt2);
    let z = Cubic::nonuniform([p0.z, p1.z, p2.z, p3.z], dt0, dt1, dt2);

    Some(Vec3::new(x.eval(weight), y.eval(weight), z.eval(weight)))
}

/// `divisions + 1` points evenly spaced in curve parameter
pub fn catmull_rom_points(points: &[Vec3], divisions: usize) -> Vec<Vec3> {
    if points.is_empty() {
        return Vec::new();
    }
    let divisions = divisions.max(1);
    (0..=divisions)
        .filter_map(|i| catmull_rom_point(points, i as f64 / divisions as f64))
        .collect()
}
