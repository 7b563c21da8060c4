//! Scoped accumulator for `Path`.
//!
//! State machine
//! - `Empty` → `move_to` → `Open` → drawing ops / further `move_to` → `close` → `Closed`.
//! - Drawing before the first `move_to` and anything after `close` is rejected
//!   with `PathError::InvalidState`; the builder is left untouched on error.
//! - `build` takes `self`, so a finished builder cannot be reused.

use nalgebra::Vector2;

use super::types::{Path, PathSegment};

/// Builder misuse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("invalid builder state for `{op}`: {reason}")]
    InvalidState {
        op: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Empty,
    Open,
    Closed,
}

#[derive(Debug)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
    state: State,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            state: State::Empty,
        }
    }

    /// Pre-size for `n` segments.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            segments: Vec::with_capacity(n),
            state: State::Empty,
        }
    }

    pub fn move_to(&mut self, p: Vector2<f64>) -> Result<&mut Self, PathError> {
        if self.state == State::Closed {
            return Err(closed_err("move_to"));
        }
        self.segments.push(PathSegment::MoveTo(p));
        self.state = State::Open;
        Ok(self)
    }

    pub fn line_to(&mut self, p: Vector2<f64>) -> Result<&mut Self, PathError> {
        self.draw("line_to", PathSegment::LineTo(p))
    }

    pub fn quad_to(
        &mut self,
        ctrl: Vector2<f64>,
        to: Vector2<f64>,
    ) -> Result<&mut Self, PathError> {
        self.draw("quad_to", PathSegment::QuadTo { ctrl, to })
    }

    pub fn cubic_to(
        &mut self,
        ctrl1: Vector2<f64>,
        ctrl2: Vector2<f64>,
        to: Vector2<f64>,
    ) -> Result<&mut Self, PathError> {
        self.draw("cubic_to", PathSegment::CubicTo { ctrl1, ctrl2, to })
    }

    pub fn close(&mut self) -> Result<&mut Self, PathError> {
        self.draw("close", PathSegment::Close)?;
        self.state = State::Closed;
        Ok(self)
    }

    /// Finish and hand out the immutable path.
    pub fn build(self) -> Path {
        Path {
            segments: self.segments,
        }
    }

    fn draw(&mut self, op: &'static str, seg: PathSegment) -> Result<&mut Self, PathError> {
        match self.state {
            State::Empty => Err(PathError::InvalidState {
                op,
                reason: "no current point; call move_to first",
            }),
            State::Closed => Err(closed_err(op)),
            State::Open => {
                self.segments.push(seg);
                Ok(self)
            }
        }
    }
}

fn closed_err(op: &'static str) -> PathError {
    PathError::InvalidState {
        op,
        reason: "path already closed",
    }
}
