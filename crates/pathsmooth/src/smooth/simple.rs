use nalgebra::Vector2;

use super::SmoothError;
use crate::path::{Path, PathBuilder};
use crate::point::midpoint;

/// Windowed smoothing.
///
/// Walks a cursor through `points`, consuming up to three points per step:
/// - 1 point left: line; 2 left: quad (middle one is the control);
///   3 left: cubic ending on the last point.
/// - 4 or more left: cubic on the next two points as controls, ending on the
///   midpoint of the points just before and just after the new cursor. The
///   moved end sits on the chord between its neighbours, so consecutive cubics
///   share a tangent direction at the join.
///
/// The final end point is always `points[n-1]`.
pub fn simple_smooth(points: &[Vector2<f64>]) -> Result<Path, SmoothError> {
    SmoothError::require(2, points.len())?;
    let n = points.len();
    tracing::debug!(n, "simple_smooth");

    let mut b = PathBuilder::with_capacity(n / 3 + 2);
    b.move_to(points[0])?;
    let mut index = 0usize;
    while index < n - 1 {
        let remaining = n - 1 - index;
        match remaining {
            1 => {
                b.line_to(points[index + 1])?;
                index += 1;
            }
            2 => {
                b.quad_to(points[index + 1], points[index + 2])?;
                index += 2;
            }
            3 => {
                b.cubic_to(points[index + 1], points[index + 2], points[index + 3])?;
                index += 3;
            }
            _ => {
                let next = index + 3;
                // remaining >= 4 keeps next + 1 <= n - 1
                let end = midpoint(points[next - 1], points[next + 1]);
                b.cubic_to(points[index + 1], points[index + 2], end)?;
                index = next;
            }
        }
    }
    Ok(b.build())
}
