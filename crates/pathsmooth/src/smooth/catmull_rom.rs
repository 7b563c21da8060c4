use nalgebra::Vector2;

use super::{SmoothCfg, SmoothError};
use crate::path::{Path, PathBuilder};
use crate::point::distance;

/// Catmull-Rom spline with the default tolerances. See [`catmull_rom_with_cfg`].
pub fn catmull_rom(points: &[Vector2<f64>], closed: bool, alpha: f64) -> Result<Path, SmoothError> {
    catmull_rom_with_cfg(points, closed, alpha, SmoothCfg::default())
}

/// Catmull-Rom spline written as cubic Béziers.
///
/// - `alpha ∈ [0, 1]`: exponent applied to chord lengths (0 uniform, 0.5 centripetal, 1 chordal).
/// - Needs at least 4 points whether open or closed.
/// - Open: starts at `points[1]`, one cubic per anchor `i ∈ [1, n-2]`; the lookahead
///   of the last anchor is clamped to `points[n-1]`.
/// - Closed: starts at `points[0]`, one cubic per anchor `i ∈ [0, n-1]` with
///   indices modulo `n`, then `Close`.
///
/// For anchor `i` with window `p0 p1 p2 p3` (previous, current, next, next-next),
/// a chord `|p1 - p0|` (resp. `|p3 - p2|`) shorter than `cfg.eps_chord` sends
/// control 1 (resp. control 2) to `p2` instead of dividing by a vanishing length.
pub fn catmull_rom_with_cfg(
    points: &[Vector2<f64>],
    closed: bool,
    alpha: f64,
    cfg: SmoothCfg,
) -> Result<Path, SmoothError> {
    SmoothError::require(4, points.len())?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(SmoothError::InvalidArgument {
            name: "alpha",
            value: alpha,
            reason: "must lie in [0, 1]",
        });
    }
    let n = points.len();
    tracing::debug!(n, closed, alpha, "catmull_rom");

    let (start, end) = if closed { (0, n) } else { (1, n - 1) };
    let mut b = PathBuilder::with_capacity(end - start + 2);
    b.move_to(points[start])?;
    for i in start..end {
        let [p0, p1, p2, p3] = window(points, i, closed);
        let (ctrl1, ctrl2) = control_points(p0, p1, p2, p3, alpha, cfg.eps_chord);
        b.cubic_to(ctrl1, ctrl2, p2)?;
    }
    if closed {
        b.close()?;
    }
    Ok(b.build())
}

/// `[prev, current, next, next-next]` around anchor `i`.
fn window(points: &[Vector2<f64>], i: usize, closed: bool) -> [Vector2<f64>; 4] {
    let n = points.len();
    if closed {
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        let next_next = (i + 2) % n;
        [points[prev], points[i], points[next], points[next_next]]
    } else {
        // open anchors are interior (1 ≤ i ≤ n-2), so only the lookahead can run off
        let next_next = (i + 2).min(n - 1);
        [points[i - 1], points[i], points[i + 1], points[next_next]]
    }
}

/// Bézier controls of the Catmull-Rom piece `p1 → p2`.
fn control_points(
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    alpha: f64,
    eps: f64,
) -> (Vector2<f64>, Vector2<f64>) {
    let d1 = distance(p1, p0);
    let d2 = distance(p2, p1);
    let d3 = distance(p3, p2);

    let d1a = d1.powf(alpha);
    let d2a = d2.powf(alpha);
    let d3a = d3.powf(alpha);
    let d1a2 = d1.powf(2.0 * alpha);
    let d2a2 = d2.powf(2.0 * alpha);
    let d3a2 = d3.powf(2.0 * alpha);

    let ctrl1 = if d1.abs() < eps {
        tracing::trace!(d1, "degenerate leading chord");
        p2
    } else {
        (p2 * d1a2 - p0 * d2a2 + p1 * (2.0 * d1a2 + 3.0 * d1a * d2a + d2a2))
            / (3.0 * d1a * (d1a + d2a))
    };
    let ctrl2 = if d3.abs() < eps {
        tracing::trace!(d3, "degenerate trailing chord");
        p2
    } else {
        (p1 * d3a2 - p3 * d2a2 + p2 * (2.0 * d3a2 + 3.0 * d3a * d2a + d2a2))
            / (3.0 * d3a * (d3a + d2a))
    };
    (ctrl1, ctrl2)
}
