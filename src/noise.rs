//! Seeded 2-D gradient noise, the spatial oracle behind disaster severity.
//!
//! Output is roughly in [-1, 1] and exactly 0.0 at integer lattice points of
//! the scaled input, so severity at a lattice coordinate reduces to its base
//! term. Deterministic for a given seed.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Sample the noise field at `(x, y)` scaled by `scale`.
pub fn perlin_noise(x: f64, y: f64, seed: u64, scale: f64) -> f64 {
    let perm = permutation(seed);

    let sx = x * scale;
    let sy = y * scale;

    let x0 = sx.floor();
    let y0 = sy.floor();
    let dx = sx - x0;
    let dy = sy - y0;

    let xi = (x0 as i64).rem_euclid(256) as usize;
    let yi = (y0 as i64).rem_euclid(256) as usize;

    let h00 = perm[perm[xi] as usize + yi];
    let h10 = perm[perm[(xi + 1) & 255] as usize + yi];
    let h01 = perm[perm[xi] as usize + ((yi + 1) & 255)];
    let h11 = perm[perm[(xi + 1) & 255] as usize + ((yi + 1) & 255)];

    let n00 = grad(h00, dx, dy);
    let n10 = grad(h10, dx - 1.0, dy);
    let n01 = grad(h01, dx, dy - 1.0);
    let n11 = grad(h11, dx - 1.0, dy - 1.0);

    let u = fade(dx);
    let v = fade(dy);

    let nx0 = lerp(n00, n10, u);
    let nx1 = lerp(n01, n11, u);
    lerp(nx0, nx1, v)
}

/// Seed-shuffled permutation table, doubled so index arithmetic never wraps.
fn permutation(seed: u64) -> [u8; 512] {
    let mut base: [u8; 256] = std::array::from_fn(|i| i as u8);
    let mut rng = SmallRng::seed_from_u64(seed);
    base.shuffle(&mut rng);

    let mut table = [0u8; 512];
    table[..256].copy_from_slice(&base);
    table[256..].copy_from_slice(&base);
    table
}

/// Dot product with one of eight unit-ish gradient directions.
fn grad(hash: u8, dx: f64, dy: f64) -> f64 {
    match hash & 7 {
        0 => dx + dy,
        1 => dx - dy,
        2 => -dx + dy,
        3 => -dx - dy,
        4 => dx,
        5 => -dx,
        6 => dy,
        _ => -dy,
    }
}

/// Smootherstep fade: zero first and second derivatives at the endpoints.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
