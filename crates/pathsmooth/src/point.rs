//! Point and vector primitives shared by all smoothing algorithms.
//!
//! Points are plain `nalgebra::Vector2<f64>` values; arithmetic (`+`, `-`,
//! scalar `*` and `/`) comes from nalgebra. This module adds the handful of
//! helpers the curve code needs on top.
//!
//! Sign convention
//! - `interpolate(a, b, t) = a + (a - b) * t`. At `t = 1` this reflects `b`
//!   through `a` (`2a - b`); it is not the usual lerp toward `b`. Callers that
//!   want the conventional blend should use `a.lerp(&b, t)` from nalgebra.
//! - Scalar `interpolate_scalar` follows the same convention.

use nalgebra::Vector2;

/// Reflected blend `a + (a - b) * amount`. Unclamped.
#[inline]
pub fn interpolate(a: Vector2<f64>, b: Vector2<f64>, amount: f64) -> Vector2<f64> {
    a + (a - b) * amount
}

/// Euclidean distance `|a - b|`.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn midpoint(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    Vector2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Distance from the origin.
#[inline]
pub fn vector_length(p: Vector2<f64>) -> f64 {
    p.norm()
}

/// Round both coordinates to a multiple of `1 / decimal` (e.g. `decimal = 100` keeps two places).
#[inline]
pub fn rounded(p: Vector2<f64>, decimal: f64) -> Vector2<f64> {
    Vector2::new((decimal * p.x).round() / decimal, (decimal * p.y).round() / decimal)
}

/// Scalar counterpart of [`interpolate`]: `v + (v - to) * amount`.
#[inline]
pub fn interpolate_scalar(v: f64, to: f64, amount: f64) -> f64 {
    v + (v - to) * amount
}

/// Clamp `v` into the interval spanned by `a` and `b`; bound order does not matter.
#[inline]
pub fn clamp(v: f64, a: f64, b: f64) -> f64 {
    let lo = if a <= b { a } else { b };
    let hi = if a <= b { b } else { a };
    v.min(hi).max(lo)
}

/// `to - v`, or its magnitude when `absolute`.
#[inline]
pub fn diff(v: f64, to: f64, absolute: bool) -> f64 {
    if absolute {
        (to - v).abs()
    } else {
        to - v
    }
}

#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Directed line segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Line2 {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.end, self.start)
    }

    /// Same start and direction, unit length. Zero-length lines come back unchanged.
    pub fn normalized(&self) -> Line2 {
        self.trimmed_to_length(1.0)
    }

    /// Same start and direction, length `len`. Zero-length lines come back unchanged.
    pub fn trimmed_to_length(&self, len: f64) -> Line2 {
        let current = self.length();
        if current <= 0.0 {
            return *self;
        }
        let dir = (self.end - self.start) / current;
        Line2::new(self.start, self.start + dir * len)
    }

    /// End reflected through the start.
    #[inline]
    pub fn flipped(&self) -> Line2 {
        Line2::new(self.start, self.start - (self.end - self.start))
    }

    /// Translate so the line starts at `to`.
    #[inline]
    pub fn transposed(&self, to: Vector2<f64>) -> Line2 {
        Line2::new(to, self.end + (to - self.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn interpolate_endpoints_reflect() {
        let a = vector![1.0, 2.0];
        let b = vector![4.0, -3.0];
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), a * 2.0 - b);
        // extrapolates on both sides
        assert_eq!(interpolate(a, b, -1.0), b);
        assert_eq!(interpolate(a, b, 0.5), vector![-0.5, 4.5]);
    }

    #[test]
    fn scalar_interpolate_matches_point_convention() {
        assert_eq!(interpolate_scalar(5.0, 10.0, 0.0), 5.0);
        assert_eq!(interpolate_scalar(5.0, 10.0, 1.0), 0.0);
        assert_eq!(interpolate_scalar(5.0, 10.0, 0.5), 2.5);
    }

    #[test]
    fn distance_and_midpoint() {
        let a = vector![0.0, 0.0];
        let b = vector![3.0, 4.0];
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
        assert!((distance(b, a) - 5.0).abs() < 1e-12);
        assert_eq!(midpoint(a, b), vector![1.5, 2.0]);
        assert!((vector_length(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_is_order_independent() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(5.0, 1.0, 0.0), 1.0);
        assert_eq!(clamp(-2.0, 3.0, -1.0), -1.0);
        assert_eq!(clamp(0.25, 1.0, 0.0), 0.25);
    }

    #[test]
    fn diff_signed_and_absolute() {
        assert_eq!(diff(3.0, 1.0, true), 2.0);
        assert_eq!(diff(3.0, 1.0, false), -2.0);
    }

    #[test]
    fn angle_conversions_round_trip_known_values() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn rounded_keeps_requested_places() {
        let p = rounded(vector![1.23456, -7.891], 100.0);
        assert!((p.x - 1.23).abs() < 1e-12);
        assert!((p.y + 7.89).abs() < 1e-12);
    }

    #[test]
    fn line_ops() {
        let l = Line2::new(vector![1.0, 1.0], vector![4.0, 5.0]);
        assert!((l.length() - 5.0).abs() < 1e-12);

        let n = l.normalized();
        assert_eq!(n.start, l.start);
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.end - vector![1.6, 1.8]).norm() < 1e-12);

        let t = l.trimmed_to_length(10.0);
        assert!((t.end - vector![7.0, 9.0]).norm() < 1e-12);

        let f = l.flipped();
        assert_eq!(f.end, vector![-2.0, -3.0]);

        let moved = l.transposed(vector![0.0, 0.0]);
        assert_eq!(moved.start, vector![0.0, 0.0]);
        assert_eq!(moved.end, vector![3.0, 4.0]);

        let zero = Line2::new(vector![2.0, 2.0], vector![2.0, 2.0]);
        assert_eq!(zero.normalized(), zero);
        assert_eq!(zero.trimmed_to_length(3.0), zero);
    }
}
