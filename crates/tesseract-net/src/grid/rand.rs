//! Random polyomino grids (cell-by-cell growth + replay tokens).
//!
//! Model
//! - Start from one cell and repeatedly add a uniformly chosen frontier cell
//!   (empty, edge-adjacent to the shape) until `cells` are filled.
//! - With `tree_only`, a frontier cell must touch exactly one filled cell, so
//!   the square adjacency graph stays a tree. Growth can then get stuck; the
//!   draw is retried up to `max_attempts` times with the same RNG stream.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG;
//!   the frontier is kept ordered so the same token always yields the same grid.

use std::collections::{BTreeSet, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Direction, Grid};

/// Polyomino sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PolyominoCfg {
    pub cells: usize,
    pub tree_only: bool,
    pub max_attempts: u32,
}

impl Default for PolyominoCfg {
    fn default() -> Self {
        Self {
            cells: 24,
            tree_only: false,
            max_attempts: 64,
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

/// Draw a connected polyomino with `cfg.cells` filled cells, cropped to its bounding box.
///
/// Returns `None` only when `tree_only` growth got stuck on every attempt.
pub fn draw_polyomino(cfg: PolyominoCfg, tok: ReplayToken) -> Option<Grid> {
    let mut rng = tok.to_std_rng();
    (0..cfg.max_attempts.max(1))
        .find_map(|_| grow(cfg, &mut rng))
        .map(|coords| Grid::from_coords(&coords))
}

fn grow<R: Rng>(cfg: PolyominoCfg, rng: &mut R) -> Option<Vec<(i32, i32)>> {
    if cfg.cells == 0 {
        return Some(Vec::new());
    }
    let mut coords = vec![(0, 0)];
    let mut taken: HashSet<(i32, i32)> = HashSet::from([(0, 0)]);
    let touching = |taken: &HashSet<(i32, i32)>, (r, c): (i32, i32)| {
        Direction::SCAN
            .iter()
            .filter(|d| {
                let (dr, dc) = d.offset();
                taken.contains(&(r + dr as i32, c + dc as i32))
            })
            .count()
    };
    while coords.len() < cfg.cells {
        let mut frontier = BTreeSet::new();
        for &(r, c) in &coords {
            for d in Direction::SCAN {
                let (dr, dc) = d.offset();
                let cell = (r + dr as i32, c + dc as i32);
                if taken.contains(&cell) {
                    continue;
                }
                if cfg.tree_only && touching(&taken, cell) != 1 {
                    continue;
                }
                frontier.insert(cell);
            }
        }
        if frontier.is_empty() {
            return None;
        }
        let pick = rng.gen_range(0..frontier.len());
        let cell = frontier.into_iter().nth(pick)?;
        taken.insert(cell);
        coords.push(cell);
    }
    Some(coords)
}
