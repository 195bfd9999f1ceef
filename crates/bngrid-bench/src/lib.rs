//! Benchmark inputs for the bngrid spatial index.
//!
//! Provides deterministic workloads shared by the benches:
//!
//! - [`sample_coordinates`]: pseudo-random points spread over the extent
//! - [`sample_references`]: the same points encoded at a resolution
//! - [`star_polygon`]: a many-sided polygon that produces both core and
//!   edge cells

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bngrid_core::{encode, GridReference, Resolution, MAX_EASTING, MAX_NORTHING};
use geo_types::{LineString, Polygon};

/// `n` deterministic coordinates inside the grid extent.
pub fn sample_coordinates(n: usize, seed: u64) -> Vec<(f64, f64)> {
    (0..n as u64)
        .map(|i| {
            let a = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            let b = a.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            let unit = |v: u64| (v >> 11) as f64 / (1u64 << 53) as f64;
            (unit(a) * MAX_EASTING, unit(b) * MAX_NORTHING)
        })
        .collect()
}

/// [`sample_coordinates`] encoded at `resolution`.
pub fn sample_references(n: usize, seed: u64, resolution: Resolution) -> Vec<GridReference> {
    sample_coordinates(n, seed)
        .into_iter()
        .filter_map(|(e, n)| encode(e, n, resolution).ok())
        .collect()
}

/// A star with `points` spikes centred on `(cx, cy)`, alternating between
/// `outer` and half of `outer` in radius.
pub fn star_polygon(cx: f64, cy: f64, outer: f64, points: usize) -> Polygon<f64> {
    let steps = points * 2;
    let mut ring: Vec<(f64, f64)> = (0..steps)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { outer / 2.0 };
            let theta = std::f64::consts::TAU * i as f64 / steps as f64;
            (cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect();
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    Polygon::new(LineString::from(ring), Vec::new())
}
