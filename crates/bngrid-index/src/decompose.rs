//! Flattening of multi-part geometries into single-part primitives.

use bngrid_core::{BngError, Result};
use geo_types::{Geometry, LineString, Point, Polygon};

/// A single-part geometry the indexer knows how to cover.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A single coordinate.
    Point(Point<f64>),
    /// An open or closed path.
    LineString(LineString<f64>),
    /// A polygon with optional holes.
    Polygon(Polygon<f64>),
}

impl Primitive {
    /// Geometry type name, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Point(_) => "Point",
            Primitive::LineString(_) => "LineString",
            Primitive::Polygon(_) => "Polygon",
        }
    }
}

impl From<Primitive> for Geometry<f64> {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Point(p) => Geometry::Point(p),
            Primitive::LineString(l) => Geometry::LineString(l),
            Primitive::Polygon(p) => Geometry::Polygon(p),
        }
    }
}

/// Recursively flatten a geometry into its primitives, in input order.
///
/// Multi-geometries and collections (nested to any depth) are expanded.
/// `Line`, `Rect` and `Triangle` are rejected with
/// `Err(BngError::UnsupportedGeometryType)`; convert them to a
/// `LineString` or `Polygon` first.
///
/// # Examples
///
/// ```
/// use bngrid_index::{decompose, Primitive};
/// use geo_types::{point, Geometry, MultiPoint};
///
/// let mp = MultiPoint::new(vec![point!(x: 1.0, y: 2.0), point!(x: 3.0, y: 4.0)]);
/// let parts = decompose(&Geometry::MultiPoint(mp)).unwrap();
/// assert_eq!(parts.len(), 2);
/// assert!(matches!(parts[0], Primitive::Point(_)));
/// ```
pub fn decompose(geometry: &Geometry<f64>) -> Result<Vec<Primitive>> {
    let mut out = Vec::new();
    decompose_into(geometry, &mut out)?;
    Ok(out)
}

fn decompose_into(geometry: &Geometry<f64>, out: &mut Vec<Primitive>) -> Result<()> {
    match geometry {
        Geometry::Point(p) => out.push(Primitive::Point(*p)),
        Geometry::LineString(l) => out.push(Primitive::LineString(l.clone())),
        Geometry::Polygon(p) => out.push(Primitive::Polygon(p.clone())),
        Geometry::MultiPoint(mp) => out.extend(mp.iter().copied().map(Primitive::Point)),
        Geometry::MultiLineString(ml) => {
            out.extend(ml.iter().cloned().map(Primitive::LineString))
        }
        Geometry::MultiPolygon(mp) => out.extend(mp.iter().cloned().map(Primitive::Polygon)),
        Geometry::GeometryCollection(gc) => {
            for g in gc.iter() {
                decompose_into(g, out)?;
            }
        }
        Geometry::Line(_) => return Err(unsupported("Line")),
        Geometry::Rect(_) => return Err(unsupported("Rect")),
        Geometry::Triangle(_) => return Err(unsupported("Triangle")),
    }
    Ok(())
}

fn unsupported(kind: &'static str) -> BngError {
    BngError::UnsupportedGeometryType { kind }
}
