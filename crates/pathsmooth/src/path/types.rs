//! Segment vocabulary and the immutable `Path` value.

use nalgebra::Vector2;

/// One drawing instruction. Consumers match exhaustively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vector2<f64>),
    LineTo(Vector2<f64>),
    QuadTo {
        ctrl: Vector2<f64>,
        to: Vector2<f64>,
    },
    CubicTo {
        ctrl1: Vector2<f64>,
        ctrl2: Vector2<f64>,
        to: Vector2<f64>,
    },
    Close,
}

impl PathSegment {
    /// Point the pen rests on after this segment (`None` for `Close`).
    #[inline]
    pub fn end_point(&self) -> Option<Vector2<f64>> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::QuadTo { to, .. } | PathSegment::CubicTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }

    /// True for line, quadratic and cubic pieces.
    #[inline]
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            PathSegment::LineTo(_) | PathSegment::QuadTo { .. } | PathSegment::CubicTo { .. }
        )
    }
}

/// Ordered segment list; insertion order is draw order.
///
/// Invariants (upheld by `PathBuilder`, the only constructor):
/// - The first segment, if any, is `MoveTo`.
/// - `Close`, if present, is the final segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub(super) segments: Vec<PathSegment>,
}

impl Path {
    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// Target of the leading `MoveTo`.
    pub fn start_point(&self) -> Option<Vector2<f64>> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// End of the last segment that places the pen (ignores a trailing `Close`).
    pub fn end_point(&self) -> Option<Vector2<f64>> {
        self.segments.iter().rev().find_map(PathSegment::end_point)
    }

    /// Number of line/quad/cubic pieces.
    pub fn curve_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_drawing()).count()
    }

    pub fn cubic_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::CubicTo { .. }))
            .count()
    }

    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
