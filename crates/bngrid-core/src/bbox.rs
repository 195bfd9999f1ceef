//! Bounding boxes and their decomposition into grid cells.

use crate::codec::{encode, MAX_EASTING, MAX_NORTHING};
use crate::diagnostic::{Diagnosed, Diagnostic};
use crate::error::Result;
use crate::reference::GridReference;
use crate::resolution::{resolve, Resolution, ResolutionSpec};
use std::fmt;

/// Axis-aligned box in grid metres.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Western edge.
    pub xmin: f64,
    /// Southern edge.
    pub ymin: f64,
    /// Eastern edge.
    pub xmax: f64,
    /// Northern edge.
    pub ymax: f64,
}

/// The full grid extent `(0, 0, 700000, 1300000)`.
pub const EXTENT: BoundingBox = BoundingBox {
    xmin: 0.0,
    ymin: 0.0,
    xmax: MAX_EASTING,
    ymax: MAX_NORTHING,
};

impl BoundingBox {
    /// Create a box from its four edges.
    pub const fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Width (easting span).
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height (northing span).
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// `true` if every edge lies within the grid extent.
    pub fn within_extent(&self) -> bool {
        self.xmin >= EXTENT.xmin
            && self.ymin >= EXTENT.ymin
            && self.xmax <= EXTENT.xmax
            && self.ymax <= EXTENT.ymax
    }

    /// `true` if `(x, y)` lies in the half-open box `[xmin, xmax) x [ymin, ymax)`.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        (self.xmin..self.xmax).contains(&x) && (self.ymin..self.ymax).contains(&y)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

/// Clamp a box to the grid extent.
///
/// A box already inside the extent is returned unchanged with no
/// diagnostics. Otherwise each offending edge is moved onto the extent
/// boundary and a [`Diagnostic::BboxClamped`] is raised.
pub fn normalise_bbox(bbox: BoundingBox) -> Diagnosed<BoundingBox> {
    if bbox.within_extent() {
        return Diagnosed::clean(bbox);
    }
    let clamped = BoundingBox::new(
        bbox.xmin.max(EXTENT.xmin),
        bbox.ymin.max(EXTENT.ymin),
        bbox.xmax.min(EXTENT.xmax),
        bbox.ymax.min(EXTENT.ymax),
    );
    let diag = Diagnostic::bbox_clamped(bbox, clamped);
    Diagnosed::with(clamped, vec![diag])
}

/// Sample positions along one axis: one per cell the half-open span
/// `[min, max)` touches, snapped to the resolution and limited to `< limit`.
///
/// A zero-width span still yields the single cell containing `min`.
fn axis_samples(min: f64, max: f64, step: u32, limit: f64) -> Vec<f64> {
    let step = step as f64;
    let lo = (min / step).floor() * step;
    let mut hi = (max / step).ceil() * step;
    if hi <= lo {
        hi = lo + step;
    }
    let count = ((hi - lo) / step).round() as usize;
    (0..count)
        .map(|i| lo + i as f64 * step)
        .filter(|&v| v < limit)
        .collect()
}

/// All cells at `resolution` covering a bounding box.
///
/// The box is first clamped to the extent (raising a diagnostic if it had
/// to move). Results are ordered south to north, then west to east.
///
/// # Examples
///
/// ```
/// use bngrid_core::{bbox_to_bng, BoundingBox};
///
/// let cells = bbox_to_bng(BoundingBox::new(400000.0, 100000.0, 500000.0, 200000.0), "50km")
///     .unwrap()
///     .into_value();
/// let names: Vec<_> = cells.iter().map(|c| c.formatted()).collect();
/// assert_eq!(names, ["SU SW", "SU SE", "SU NW", "SU NE"]);
/// ```
pub fn bbox_to_bng(
    bbox: BoundingBox,
    resolution: impl Into<ResolutionSpec>,
) -> Result<Diagnosed<Vec<GridReference>>> {
    let resolution = resolve(resolution)?;
    bbox_cells(bbox, resolution)
}

/// [`bbox_to_bng`] for an already-resolved [`Resolution`].
pub fn bbox_cells(
    bbox: BoundingBox,
    resolution: Resolution,
) -> Result<Diagnosed<Vec<GridReference>>> {
    let Diagnosed {
        value: bbox,
        diagnostics,
    } = normalise_bbox(bbox);

    let empty = bbox.xmin >= EXTENT.xmax
        || bbox.ymin >= EXTENT.ymax
        || bbox.xmax < bbox.xmin
        || bbox.ymax < bbox.ymin;
    if empty {
        return Ok(Diagnosed::with(Vec::new(), diagnostics));
    }

    let step = resolution.metres();
    let eastings = axis_samples(bbox.xmin, bbox.xmax, step, EXTENT.xmax);
    let northings = axis_samples(bbox.ymin, bbox.ymax, step, EXTENT.ymax);
    tracing::trace!(
        resolution = %resolution,
        columns = eastings.len(),
        rows = northings.len(),
        "enumerating bbox cells"
    );

    let mut cells = Vec::with_capacity(eastings.len() * northings.len());
    for &n in &northings {
        for &e in &eastings {
            cells.push(encode(e, n, resolution)?);
        }
    }
    Ok(Diagnosed::with(cells, diagnostics))
}
