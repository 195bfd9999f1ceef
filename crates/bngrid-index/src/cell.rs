//! Grid cells as polygons.

use bngrid_core::{bng_to_bbox, GridReference};
use geo_types::{LineString, Polygon};

/// The cell square of a reference.
///
/// The exterior ring runs counter-clockwise from the upper-right corner and
/// is closed.
///
/// # Examples
///
/// ```
/// use bngrid_core::GridReference;
/// use bngrid_index::bng_to_grid_geom;
///
/// let su = GridReference::parse("SU").unwrap();
/// let square = bng_to_grid_geom(&su);
/// let first = square.exterior().0[0];
/// assert_eq!((first.x, first.y), (500000.0, 200000.0));
/// ```
pub fn bng_to_grid_geom(reference: &GridReference) -> Polygon<f64> {
    let b = bng_to_bbox(reference);
    let ring = LineString::from(vec![
        (b.xmax, b.ymax),
        (b.xmin, b.ymax),
        (b.xmin, b.ymin),
        (b.xmax, b.ymin),
        (b.xmax, b.ymax),
    ]);
    Polygon::new(ring, Vec::new())
}
