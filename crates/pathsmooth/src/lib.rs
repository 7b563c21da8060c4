//! Path smoothing: turn an ordered 2D point sequence into a smooth `Path` of
//! move/line/quad/cubic/close segments.
//!
//! Modules
//! - `point`: vector helpers (reflected `interpolate`, `distance`, `midpoint`, `Line2`).
//! - `path`: segment vocabulary, `PathBuilder`, sampling.
//! - `smooth`: simple windowed smoothing, Hermite, and Catmull-Rom interpolation.
//! - `rand`: reproducible drawing-like sample sequences for tests and benches.
//!
//! Everything here is pure and synchronous: no I/O, no shared state. The
//! only allocation per call is the returned path.

pub mod path;
pub mod point;
pub mod rand;
pub mod smooth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use path::{Path, PathBuilder, PathError, PathSegment};
pub use smooth::{
    catmull_rom, catmull_rom_with_cfg, hermite, simple_smooth, smooth, InterpolationRequest,
    Method, SmoothCfg, SmoothError,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::path::{Path, PathBuilder, PathSegment};
    pub use crate::point::{distance, interpolate, midpoint, Line2};
    pub use crate::smooth::{
        catmull_rom, hermite, simple_smooth, smooth, InterpolationRequest, Method, SmoothError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
