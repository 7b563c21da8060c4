//! Reproducible point sequences that look like drawing samples.
//!
//! Model
//! - Open strokes are a heading random walk: each step turns by a bounded
//!   jitter and advances by a jittered step length.
//! - Loops (`closed_loop`) place points on a ring whose circumference is
//!   roughly `point_count * step`, with radial jitter.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: benches, `smooth` seeded tests, cli `sample`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Stroke sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StrokeCfg {
    pub point_count: usize,
    /// Nominal distance between consecutive samples.
    pub step: f64,
    /// Max heading change per step in radians (walk) or relative radial jitter (loop).
    pub turn_jitter: f64,
    /// Relative step-length jitter. Clamped to [0, 0.95].
    pub step_jitter: f64,
    pub closed_loop: bool,
}

impl Default for StrokeCfg {
    fn default() -> Self {
        Self {
            point_count: 32,
            step: 10.0,
            turn_jitter: 0.4,
            step_jitter: 0.3,
            closed_loop: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.point_count` samples. Same token, same output.
pub fn draw_stroke(cfg: StrokeCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.point_count;
    let step = cfg.step.abs().max(1e-9);
    let sj = cfg.step_jitter.clamp(0.0, 0.95);
    let tj = cfg.turn_jitter.abs();
    if cfg.closed_loop {
        let radius = step * (n.max(1) as f64) / std::f64::consts::TAU;
        let phase = rng.gen::<f64>() * std::f64::consts::TAU;
        return (0..n)
            .map(|k| {
                let th = phase + k as f64 * std::f64::consts::TAU / n as f64;
                let r = radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * tj.min(0.95));
                Vector2::new(th.cos() * r, th.sin() * r)
            })
            .collect();
    }
    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut p = Vector2::zeros();
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(p);
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * tj;
        let len = step * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * sj);
        p += Vector2::new(heading.cos(), heading.sin()) * len;
    }
    out
}
