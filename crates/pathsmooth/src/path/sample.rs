//! Evaluate path pieces and flatten a `Path` into polylines.

use nalgebra::Vector2;

use super::types::{Path, PathSegment};

/// Quadratic Bézier at `t ∈ [0, 1]`.
#[inline]
pub fn quad_point(p0: Vector2<f64>, c: Vector2<f64>, p1: Vector2<f64>, t: f64) -> Vector2<f64> {
    let u = 1.0 - t;
    p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t)
}

/// Cubic Bézier at `t ∈ [0, 1]`.
#[inline]
pub fn cubic_point(
    p0: Vector2<f64>,
    c1: Vector2<f64>,
    c2: Vector2<f64>,
    p1: Vector2<f64>,
    t: f64,
) -> Vector2<f64> {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p1 * (t * t * t)
}

/// Sum of consecutive distances.
pub fn polyline_length(points: &[Vector2<f64>]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

impl Path {
    /// One polyline per subpath. Curves are sampled at `samples_per_segment`
    /// evenly spaced parameters (end included, start shared with the previous
    /// piece); lines contribute their end point only. `Close` appends the
    /// subpath start unless the pen is already there. `0` is treated as `1`.
    pub fn flatten(&self, samples_per_segment: usize) -> Vec<Vec<Vector2<f64>>> {
        let k = samples_per_segment.max(1);
        let mut out: Vec<Vec<Vector2<f64>>> = Vec::new();
        let mut pen = Vector2::zeros();
        let mut subpath_start = Vector2::zeros();
        for seg in self.segments() {
            match *seg {
                PathSegment::MoveTo(p) => {
                    out.push(vec![p]);
                    pen = p;
                    subpath_start = p;
                }
                PathSegment::LineTo(p) => {
                    push(&mut out, p);
                    pen = p;
                }
                PathSegment::QuadTo { ctrl, to } => {
                    for i in 1..=k {
                        let t = i as f64 / k as f64;
                        push(&mut out, quad_point(pen, ctrl, to, t));
                    }
                    pen = to;
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                    for i in 1..=k {
                        let t = i as f64 / k as f64;
                        push(&mut out, cubic_point(pen, ctrl1, ctrl2, to, t));
                    }
                    pen = to;
                }
                PathSegment::Close => {
                    if pen != subpath_start {
                        push(&mut out, subpath_start);
                    }
                    pen = subpath_start;
                }
            }
        }
        out
    }
}

#[inline]
fn push(out: &mut [Vec<Vector2<f64>>], p: Vector2<f64>) {
    // Builder guarantees a MoveTo opened the current subpath.
    if let Some(current) = out.last_mut() {
        current.push(p);
    }
}
