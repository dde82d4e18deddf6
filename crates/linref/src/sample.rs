//! Random integer polylines (heading random walk + replay tokens).
//!
//! Purpose
//! - Deterministic test and benchmark inputs, and sample files for the CLI.
//!
//! Model
//! - Start at the origin with a random heading. Each step turns by at most
//!   `max_turn` radians and advances a length drawn from `[step_min, step_max]`,
//!   then rounds to the integer grid.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Random-walk sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub vertex_count: usize,
    pub step_min: f64,
    pub step_max: f64,
    /// Maximum heading change per step, radians. Clamped to [0, π].
    pub max_turn: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            vertex_count: 64,
            step_min: 5.0,
            step_max: 50.0,
            max_turn: std::f64::consts::FRAC_PI_3,
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

/// Draw `cfg.vertex_count` vertices of a random walk. Consecutive vertices
/// may coincide when steps round to zero, which yields degenerate segments.
pub fn random_walk(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let turn = cfg.max_turn.clamp(0.0, std::f64::consts::PI);
    let lo = cfg.step_min.max(0.0);
    let hi = cfg.step_max.max(lo);

    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let (mut x, mut y) = (0.0f64, 0.0f64);
    let mut points = Vec::with_capacity(cfg.vertex_count);
    for k in 0..cfg.vertex_count {
        if k > 0 {
            if turn > 0.0 {
                heading += rng.gen_range(-turn..=turn);
            }
            let step = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
            x += heading.cos() * step;
            y += heading.sin() * step;
        }
        points.push(Point::new(to_grid(x), to_grid(y)));
    }
    points
}

#[inline]
fn to_grid(v: f64) -> i32 {
    v.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
