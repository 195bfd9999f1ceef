//! Neighbourhood traversal and distance queries.
//!
//! All operations count in cells of the reference's own resolution. Offsets
//! are applied to the cell centroid and re-encoded, so cells in adjacent
//! 100km squares are found without special casing. Offsets that leave the
//! grid extent are dropped; each call reports at most one
//! [`Diagnostic::CellsOutsideExtent`] for them.

use bngrid_core::{
    bng_to_xy, encode, BngError, Corner, Diagnosed, Diagnostic, GridReference, Result,
};
use smallvec::SmallVec;

/// Edge-sharing offsets in N, E, S, W order.
const NEIGHBOUR_OFFSETS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// How [`bng_distance`] measures the gap between two cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// Euclidean distance between cell centroids.
    #[default]
    Centroid,
    /// Centroid separation shrunk on each axis by half the summed cell
    /// sizes, floored at zero.
    ///
    /// Exact for axis-aligned separations; for diagonal configurations it
    /// measures corner to corner and stays an approximation.
    EdgeToEdge,
}

/// Encode each offset (in cells) from the reference's centroid, dropping
/// those that leave the extent.
fn offset_cells<C>(
    reference: &GridReference,
    offsets: impl IntoIterator<Item = (i64, i64)>,
) -> Result<Diagnosed<C>>
where
    C: Default + Extend<GridReference>,
{
    let (xc, yc) = bng_to_xy(reference, Corner::Centre);
    let res = reference.resolution();
    let step = res.metres() as f64;
    let mut out = C::default();
    let mut dropped = 0usize;
    for (dx, dy) in offsets {
        match encode(xc + dx as f64 * step, yc + dy as f64 * step, res) {
            Ok(cell) => out.extend(Some(cell)),
            Err(BngError::OutOfExtent { .. }) => dropped += 1,
            Err(e) => return Err(e),
        }
    }
    let diagnostics = if dropped > 0 {
        vec![Diagnostic::cells_outside_extent(dropped)]
    } else {
        Vec::new()
    };
    Ok(Diagnosed::with(out, diagnostics))
}

/// The up-to-four cells sharing an edge with `reference`, in N, E, S, W
/// order.
///
/// Neighbours off the grid are dropped with a
/// [`Diagnostic::CellsOutsideExtent`]. Any other encoding failure is
/// returned as is.
///
/// # Examples
///
/// ```
/// use bngrid_core::GridReference;
/// use bngrid_space::bng_neighbours;
///
/// let r = GridReference::parse("SU 1 2").unwrap();
/// let n = bng_neighbours(&r).unwrap().value;
/// let names: Vec<_> = n.iter().map(|c| c.compact().to_owned()).collect();
/// assert_eq!(names, ["SU13", "SU22", "SU11", "SU02"]);
///
/// // The south-west corner of the grid only has two neighbours.
/// let corner = GridReference::parse("SV0000").unwrap();
/// let n = bng_neighbours(&corner).unwrap();
/// assert_eq!(n.value.len(), 2);
/// assert!(n.has_warnings());
/// ```
pub fn bng_neighbours(
    reference: &GridReference,
) -> Result<Diagnosed<SmallVec<[GridReference; 4]>>> {
    offset_cells(reference, NEIGHBOUR_OFFSETS)
}

/// `true` if `b` shares an edge with `a`.
///
/// Returns `Err(BngError::NeighbourResolutionMismatch)` if the references
/// are at different resolutions.
pub fn bng_is_neighbour(a: &GridReference, b: &GridReference) -> Result<bool> {
    if a.resolution() != b.resolution() {
        return Err(BngError::NeighbourResolutionMismatch {
            a: a.compact().to_owned(),
            a_resolution: a.resolution(),
            b: b.compact().to_owned(),
            b_resolution: b.resolution(),
        });
    }
    Ok(bng_neighbours(a)?.value.contains(b))
}

fn ring_or_disc(
    reference: &GridReference,
    k: u32,
    disc: bool,
) -> Result<Diagnosed<Vec<GridReference>>> {
    if k == 0 {
        return Err(BngError::InvalidRingRadius { k });
    }
    let k = i64::from(k);
    let offsets = (-k..=k).flat_map(move |dy| {
        (-k..=k)
            .filter(move |dx| disc || dy.abs() == k || dx.abs() == k)
            .map(move |dx| (dx, dy))
    });
    offset_cells(reference, offsets)
}

/// The hollow ring of cells at Chebyshev distance exactly `k`.
///
/// Cells are produced by scanning `dy` from `-k` to `k`, and `dx` from `-k`
/// to `k` within each row. Returns `Err(BngError::InvalidRingRadius)` for
/// `k = 0`.
///
/// ```
/// use bngrid_core::GridReference;
/// use bngrid_space::bng_kring;
///
/// let r = GridReference::parse("SU1234").unwrap();
/// assert_eq!(bng_kring(&r, 1).unwrap().value.len(), 8);
/// ```
pub fn bng_kring(reference: &GridReference, k: u32) -> Result<Diagnosed<Vec<GridReference>>> {
    ring_or_disc(reference, k, false)
}

/// Every cell within Chebyshev distance `k`, including `reference` itself.
///
/// Same scan order and failure rules as [`bng_kring`].
///
/// ```
/// use bngrid_core::GridReference;
/// use bngrid_space::bng_kdisc;
///
/// let r = GridReference::parse("SU1234").unwrap();
/// let disc = bng_kdisc(&r, 1).unwrap().value;
/// assert_eq!(disc.len(), 9);
/// assert!(disc.contains(&r));
/// ```
pub fn bng_kdisc(reference: &GridReference, k: u32) -> Result<Diagnosed<Vec<GridReference>>> {
    ring_or_disc(reference, k, true)
}

fn edge_gap(a: f64, b: f64, half_sum: f64) -> f64 {
    ((a - b).abs() - half_sum).max(0.0)
}

/// Distance in metres between two cells, at any resolutions.
///
/// ```
/// use bngrid_core::GridReference;
/// use bngrid_space::{bng_distance, DistanceMetric};
///
/// let a = GridReference::parse("SE1433").unwrap();
/// let b = GridReference::parse("SE1533").unwrap();
/// assert_eq!(bng_distance(&a, &b, DistanceMetric::Centroid), 1000.0);
/// assert_eq!(bng_distance(&a, &b, DistanceMetric::EdgeToEdge), 0.0);
/// ```
pub fn bng_distance(a: &GridReference, b: &GridReference, metric: DistanceMetric) -> f64 {
    let (ax, ay) = bng_to_xy(a, Corner::Centre);
    let (bx, by) = bng_to_xy(b, Corner::Centre);
    match metric {
        DistanceMetric::Centroid => (ax - bx).hypot(ay - by),
        DistanceMetric::EdgeToEdge => {
            let half_sum = f64::from(a.resolution_metres() + b.resolution_metres()) / 2.0;
            edge_gap(ax, bx, half_sum).hypot(edge_gap(ay, by, half_sum))
        }
    }
}

/// Cells at the reference's resolution whose edge-to-edge distance from
/// `reference` is at most `d` metres.
///
/// Candidates are the k-disc with `k = ceil(d / resolution)`. Returns
/// `Err(BngError::InvalidDistance)` for negative or non-finite `d`, and
/// `Err(BngError::InvalidRingRadius)` for `d = 0`, which gives `k = 0`.
pub fn bng_dwithin(reference: &GridReference, d: f64) -> Result<Diagnosed<Vec<GridReference>>> {
    if !d.is_finite() || d < 0.0 {
        return Err(BngError::InvalidDistance { distance: d });
    }
    let k = (d / f64::from(reference.resolution_metres())).ceil() as u32;
    tracing::trace!(reference = reference.compact(), d, k, "dwithin candidates");
    let disc = bng_kdisc(reference, k)?;
    Ok(disc.map(|cells| {
        cells
            .into_iter()
            .filter(|c| bng_distance(reference, c, DistanceMetric::EdgeToEdge) <= d)
            .collect()
    }))
}
