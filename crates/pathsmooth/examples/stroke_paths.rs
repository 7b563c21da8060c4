//! Print the segments each strategy produces for one sampled stroke.
//!
//! Usage:
//!   cargo run -p pathsmooth --example stroke_paths -- [simple|hermite|catmull]
//!
//! Prints one line per segment plus the flattened length.

use pathsmooth::path::polyline_length;
use pathsmooth::rand::{draw_stroke, ReplayToken, StrokeCfg};
use pathsmooth::{smooth, InterpolationRequest, Method};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "catmull".to_string());
    let method = match mode.as_str() {
        "simple" => Method::Simple,
        "hermite" => Method::Hermite,
        "catmull" => Method::CatmullRom { alpha: 0.5 },
        _ => {
            eprintln!("usage: stroke_paths [simple|hermite|catmull]");
            return;
        }
    };
    let cfg = StrokeCfg {
        point_count: 9,
        ..StrokeCfg::default()
    };
    let points = draw_stroke(cfg, ReplayToken::new(2025, 0));
    let req = InterpolationRequest::new(points, method);
    match smooth(&req) {
        Ok(path) => {
            for seg in &path {
                println!("{seg:?}");
            }
            let len: f64 = path.flatten(16).iter().map(|p| polyline_length(p)).sum();
            println!("segments={} flattened_length={len:.3}", path.len());
        }
        Err(e) => eprintln!("smoothing failed: {e}"),
    }
}
