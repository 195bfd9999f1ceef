//! Covering geometries with grid cells.
//!
//! Both entry points decompose the input into primitives and treat each
//! part independently:
//!
//! - a point is encoded directly, failing if it lies off the grid;
//! - a linestring or polygon selects candidate cells from its bounding box
//!   (clamped to the extent, with a diagnostic if it had to move), then
//!   filters them against the part with the `geo` predicates.

use crate::cell::bng_to_grid_geom;
use crate::decompose::{decompose, Primitive};
use bngrid_core::{
    bbox_cells, encode, resolve, BoundingBox, Diagnosed, Diagnostic, GridReference, Resolution,
    ResolutionSpec, Result,
};
use geo::line_measures::LengthMeasurable;
use geo::{Area, BooleanOps, BoundingRect, Contains, Euclidean, Intersects};
use geo_types::{Geometry, LineString, MultiLineString, Polygon};
use indexmap::IndexSet;

/// One cell's share of an indexed geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedGeometry {
    /// The grid cell.
    pub cell: GridReference,
    /// `true` if the cell lies wholly inside a polygon part.
    pub is_core: bool,
    /// The full cell square for core cells, otherwise the part clipped to
    /// the cell.
    pub geometry: Geometry<f64>,
}

/// Candidate cells for a linear or areal part: every cell its bounding box
/// touches. Parts with no coordinates have no candidates.
fn candidates(
    rect: Option<geo_types::Rect<f64>>,
    resolution: Resolution,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<GridReference>> {
    let Some(rect) = rect else {
        return Ok(Vec::new());
    };
    let (min, max) = (rect.min(), rect.max());
    let bbox = BoundingBox::new(min.x, min.y, max.x, max.y);
    Ok(bbox_cells(bbox, resolution)?.drain_into(diagnostics))
}

/// The set of cells a geometry touches, deduplicated across parts and in
/// first-seen order.
///
/// Returns `Err(BngError::UnsupportedResolution)` for an unknown
/// resolution, `Err(BngError::UnsupportedGeometryType)` for `Line`, `Rect`
/// or `Triangle` parts, and `Err(BngError::OutOfExtent)` for a point part
/// off the grid.
///
/// # Examples
///
/// ```
/// use bngrid_index::geom_to_bng;
/// use geo_types::{polygon, Geometry};
///
/// let square = polygon![
///     (x: 400000.0, y: 100000.0),
///     (x: 402000.0, y: 100000.0),
///     (x: 402000.0, y: 102000.0),
///     (x: 400000.0, y: 102000.0),
/// ];
/// let cells = geom_to_bng(&Geometry::Polygon(square), "1km").unwrap().into_value();
/// let names: Vec<_> = cells.iter().map(|c| c.compact().to_owned()).collect();
/// assert_eq!(names, ["SU0000", "SU0100", "SU0001", "SU0101"]);
/// ```
pub fn geom_to_bng(
    geometry: &Geometry<f64>,
    resolution: impl Into<ResolutionSpec>,
) -> Result<Diagnosed<Vec<GridReference>>> {
    let resolution = resolve(resolution)?;
    let parts = decompose(geometry)?;
    let mut diagnostics = Vec::new();
    let mut cells = IndexSet::new();

    for part in &parts {
        match part {
            Primitive::Point(p) => {
                cells.insert(encode(p.x(), p.y(), resolution)?);
            }
            Primitive::LineString(line) => {
                for cell in candidates(line.bounding_rect(), resolution, &mut diagnostics)? {
                    if bng_to_grid_geom(&cell).intersects(line) {
                        cells.insert(cell);
                    }
                }
            }
            Primitive::Polygon(poly) => {
                for cell in candidates(poly.bounding_rect(), resolution, &mut diagnostics)? {
                    if bng_to_grid_geom(&cell).intersects(poly) {
                        cells.insert(cell);
                    }
                }
            }
        }
    }

    tracing::trace!(
        parts = parts.len(),
        cells = cells.len(),
        resolution = %resolution,
        "indexed geometry"
    );
    Ok(Diagnosed::with(cells.into_iter().collect(), diagnostics))
}

/// Split a geometry along grid cell boundaries.
///
/// Each part yields its own entries, so a cell shared by two parts appears
/// once per part:
///
/// - a point yields its cell with the point as geometry;
/// - a linestring yields each cell it passes through with the clipped
///   multi-linestring. Cells it only touches at a corner are left out;
/// - a polygon yields each cell it wholly contains as a core entry carrying
///   the full cell square, and each cell it partly overlaps as an edge entry
///   carrying the clipped multi-polygon. Cells the polygon only touches
///   along a boundary are left out.
///
/// Fails in the same cases as [`geom_to_bng`].
pub fn geom_to_bng_intersection(
    geometry: &Geometry<f64>,
    resolution: impl Into<ResolutionSpec>,
) -> Result<Diagnosed<Vec<IndexedGeometry>>> {
    let resolution = resolve(resolution)?;
    let parts = decompose(geometry)?;
    let mut diagnostics = Vec::new();
    let mut out = Vec::new();

    for part in &parts {
        match part {
            Primitive::Point(p) => out.push(IndexedGeometry {
                cell: encode(p.x(), p.y(), resolution)?,
                is_core: false,
                geometry: Geometry::Point(*p),
            }),
            Primitive::LineString(line) => {
                let cands = candidates(line.bounding_rect(), resolution, &mut diagnostics)?;
                out.extend(clip_line(line, cands));
            }
            Primitive::Polygon(poly) => {
                let cands = candidates(poly.bounding_rect(), resolution, &mut diagnostics)?;
                out.extend(split_polygon(poly, cands));
            }
        }
    }

    tracing::trace!(
        parts = parts.len(),
        entries = out.len(),
        resolution = %resolution,
        "indexed geometry with intersections"
    );
    Ok(Diagnosed::with(out, diagnostics))
}

fn clip_line(line: &LineString<f64>, cells: Vec<GridReference>) -> Vec<IndexedGeometry> {
    let lines = MultiLineString::new(vec![line.clone()]);
    cells
        .into_iter()
        .filter_map(|cell| {
            let square = bng_to_grid_geom(&cell);
            if !square.intersects(line) {
                return None;
            }
            let clipped = square.clip(&lines, false);
            // Corner contact intersects but clips to nothing.
            if clipped.0.is_empty() || clipped.length(&Euclidean) == 0.0 {
                return None;
            }
            Some(IndexedGeometry {
                cell,
                is_core: false,
                geometry: Geometry::MultiLineString(clipped),
            })
        })
        .collect()
}

fn split_polygon(poly: &Polygon<f64>, cells: Vec<GridReference>) -> Vec<IndexedGeometry> {
    cells
        .into_iter()
        .filter_map(|cell| {
            let square = bng_to_grid_geom(&cell);
            if !square.intersects(poly) {
                return None;
            }
            if poly.contains(&square) {
                return Some(IndexedGeometry {
                    cell,
                    is_core: true,
                    geometry: Geometry::Polygon(square),
                });
            }
            let clipped = square.intersection(poly);
            if clipped.0.is_empty() || clipped.unsigned_area() == 0.0 {
                return None;
            }
            Some(IndexedGeometry {
                cell,
                is_core: false,
                geometry: Geometry::MultiPolygon(clipped),
            })
        })
        .collect()
}
