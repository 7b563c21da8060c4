//! Path model: segment vocabulary, builder, and sampling.
//!
//! Purpose
//! - Give every smoothing algorithm one output type (`Path`) built through one
//!   accumulator (`PathBuilder`) that rejects malformed segment orders.
//! - Keep the output a closed sum type so downstream drawing code matches
//!   exhaustively instead of dispatching on a drawing object.
//!
//! Code cross-refs: `smooth::{simple, hermite, catmull_rom}` (producers).

mod builder;
mod sample;
mod types;

pub use builder::{PathBuilder, PathError};
pub use sample::{cubic_point, polyline_length, quad_point};
pub use types::{Path, PathSegment};
