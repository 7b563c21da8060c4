use nalgebra::Vector2;

use super::SmoothError;
use crate::path::{Path, PathBuilder};

/// Hermite (cardinal) spline through every point.
///
/// Tangent at a point = average of its incoming and outgoing chords, halved at
/// open ends where one neighbour is missing. Each piece `current → next` is a
/// cubic with controls `current + m_current/3` and `next - m_next/3`.
///
/// Open: `n - 1` cubics. Closed: `n` cubics (the last returns to `points[0]`)
/// followed by `Close`.
pub fn hermite(points: &[Vector2<f64>], closed: bool) -> Result<Path, SmoothError> {
    SmoothError::require(2, points.len())?;
    let n = points.len();
    tracing::debug!(n, closed, "hermite");

    let curve_count = if closed { n } else { n - 1 };
    let mut b = PathBuilder::with_capacity(curve_count + 2);
    b.move_to(points[0])?;
    for i in 0..curve_count {
        let current = points[i];
        let next = points[(i + 1) % n];
        let m_current = tangent(neighbor(points, i, -1, closed), current, Some(next));
        let m_next = tangent(Some(current), next, neighbor(points, i + 1, 1, closed));
        let ctrl1 = current + m_current / 3.0;
        let ctrl2 = next - m_next / 3.0;
        b.cubic_to(ctrl1, ctrl2, next)?;
    }
    if closed {
        b.close()?;
    }
    Ok(b.build())
}

/// Neighbour of `points[i]` at `offset` (±1). Wraps when closed; `None` past an open end.
fn neighbor(
    points: &[Vector2<f64>],
    i: usize,
    offset: isize,
    closed: bool,
) -> Option<Vector2<f64>> {
    let n = points.len() as isize;
    let j = i as isize + offset;
    if closed {
        Some(points[j.rem_euclid(n) as usize])
    } else if (0..n).contains(&j) {
        Some(points[j as usize])
    } else {
        None
    }
}

/// Chord-average tangent; one-sided half chord at open ends.
#[inline]
fn tangent(
    prev: Option<Vector2<f64>>,
    at: Vector2<f64>,
    next: Option<Vector2<f64>>,
) -> Vector2<f64> {
    match (prev, next) {
        (Some(p), Some(q)) => (q - at) * 0.5 + (at - p) * 0.5,
        (None, Some(q)) => (q - at) * 0.5,
        (Some(p), None) => (at - p) * 0.5,
        (None, None) => Vector2::zeros(),
    }
}
