//! Point-sequence smoothing: three interchangeable strategies producing a `Path`.
//!
//! Purpose
//! - `simple_smooth`: windowed cubic runs with a midpoint rule every third
//!   point, degrading to quad/line for short tails.
//! - `hermite`: cubic spline through every point, tangents from neighbouring chords.
//! - `catmull_rom`: alpha-parametrized Catmull-Rom (uniform, centripetal, chordal).
//!
//! Failure model
//! - Too few points → `SmoothError::InsufficientPoints`; alpha outside `[0,1]` →
//!   `SmoothError::InvalidArgument`. No partial path is ever returned.
//!
//! Code cross-refs: `path::{Path, PathBuilder}`, `point::{distance, midpoint}`.

mod catmull_rom;
mod hermite;
mod simple;

pub use catmull_rom::{catmull_rom, catmull_rom_with_cfg};
pub use hermite::hermite;
pub use simple::simple_smooth;

use nalgebra::Vector2;

use crate::path::{Path, PathError};

/// Errors surfaced by the smoothing algorithms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmoothError {
    /// Fewer input points than the algorithm's minimum.
    #[error("need at least {required} points, got {got}")]
    InsufficientPoints { required: usize, got: usize },
    /// A parameter outside its documented domain (caller bug).
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error(transparent)]
    Path(#[from] PathError),
}

impl SmoothError {
    pub(crate) fn require(required: usize, got: usize) -> Result<(), SmoothError> {
        if got < required {
            Err(SmoothError::InsufficientPoints { required, got })
        } else {
            Ok(())
        }
    }
}

/// Smoothing tolerances.
#[derive(Clone, Copy, Debug)]
pub struct SmoothCfg {
    /// Chords shorter than this take the degenerate control-point rule in Catmull-Rom.
    pub eps_chord: f64,
}

impl Default for SmoothCfg {
    fn default() -> Self {
        Self { eps_chord: 1e-5 }
    }
}

/// Which strategy a request runs, with its strategy-specific parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Method {
    Simple,
    Hermite,
    /// `alpha`: 0 uniform, 0.5 centripetal, 1 chordal.
    CatmullRom { alpha: f64 },
}

/// Input bundle for [`smooth`]. `closed` is ignored by `Method::Simple`.
#[derive(Clone, Debug)]
pub struct InterpolationRequest {
    pub points: Vec<Vector2<f64>>,
    pub closed: bool,
    pub method: Method,
}

impl InterpolationRequest {
    pub fn new(points: Vec<Vector2<f64>>, method: Method) -> Self {
        Self {
            points,
            closed: false,
            method,
        }
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Minimum point count for the selected method.
    pub fn min_points(&self) -> usize {
        match self.method {
            Method::Simple | Method::Hermite => 2,
            Method::CatmullRom { .. } => 4,
        }
    }
}

/// Run the requested strategy.
pub fn smooth(req: &InterpolationRequest) -> Result<Path, SmoothError> {
    match req.method {
        Method::Simple => simple_smooth(&req.points),
        Method::Hermite => hermite(&req.points, req.closed),
        Method::CatmullRom { alpha } => catmull_rom(&req.points, req.closed, alpha),
    }
}
