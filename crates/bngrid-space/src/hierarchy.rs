//! Parent/child navigation across resolutions.
//!
//! The scale chain, coarsest first, alternates ÷2 and ÷5:
//! 100km → 50km → 10km → 5km → 1km → 500m → 100m → 50m → 10m → 5m → 1m.

use bngrid_core::{
    bbox_cells, bng_to_bbox, bng_to_xy, encode, resolve, BngError, Corner, GridReference,
    HierarchyDirection, Resolution, ResolutionSpec, Result,
};

fn boundary(reference: &GridReference, direction: HierarchyDirection) -> BngError {
    BngError::HierarchyBoundary {
        reference: reference.compact().to_owned(),
        resolution: reference.resolution(),
        direction,
    }
}

/// Children at the next finer level.
///
/// Ordered south to north, then west to east.
///
/// Returns `Err(BngError::HierarchyBoundary)` for a 1m reference.
///
/// # Examples
///
/// ```
/// use bngrid_core::GridReference;
/// use bngrid_space::bng_to_children;
///
/// let su = GridReference::parse("SU").unwrap();
/// let names: Vec<_> = bng_to_children(&su).unwrap().iter().map(|c| c.formatted()).collect();
/// assert_eq!(names, ["SU SW", "SU SE", "SU NW", "SU NE"]);
/// ```
pub fn bng_to_children(reference: &GridReference) -> Result<Vec<GridReference>> {
    let target = reference
        .resolution()
        .finer()
        .ok_or_else(|| boundary(reference, HierarchyDirection::Children))?;
    children_at(reference, target)
}

/// Children at an explicit resolution, which must be strictly finer than
/// the reference's own.
///
/// Returns `Err(BngError::HierarchyBoundary)` for a 1m reference,
/// `Err(BngError::UnsupportedResolution)` for an unknown token, and
/// `Err(BngError::HierarchyDirection)` if the target is not finer.
pub fn bng_to_children_at(
    reference: &GridReference,
    resolution: impl Into<ResolutionSpec>,
) -> Result<Vec<GridReference>> {
    if reference.resolution().finer().is_none() {
        return Err(boundary(reference, HierarchyDirection::Children));
    }
    let target = resolve(resolution)?;
    if !target.is_finer_than(reference.resolution()) {
        return Err(BngError::HierarchyDirection {
            reference: reference.compact().to_owned(),
            resolution: reference.resolution(),
            requested: target,
            direction: HierarchyDirection::Children,
            expected: "finer",
        });
    }
    children_at(reference, target)
}

fn children_at(reference: &GridReference, target: Resolution) -> Result<Vec<GridReference>> {
    // A cell's box is always inside the extent, so no diagnostics arise.
    Ok(bbox_cells(bng_to_bbox(reference), target)?.into_value())
}

/// Parent at the next coarser level.
///
/// Returns `Err(BngError::HierarchyBoundary)` for a 100km reference.
///
/// # Examples
///
/// ```
/// use bngrid_core::GridReference;
/// use bngrid_space::bng_to_parent;
///
/// let r = GridReference::parse("SU 3 6 SW").unwrap();
/// assert_eq!(bng_to_parent(&r).unwrap().formatted(), "SU 3 6");
/// ```
pub fn bng_to_parent(reference: &GridReference) -> Result<GridReference> {
    let target = reference
        .resolution()
        .coarser()
        .ok_or_else(|| boundary(reference, HierarchyDirection::Parent))?;
    parent_at(reference, target)
}

/// Parent at an explicit resolution, which must be strictly coarser than
/// the reference's own.
///
/// Returns `Err(BngError::HierarchyBoundary)` for a 100km reference,
/// `Err(BngError::UnsupportedResolution)` for an unknown token, and
/// `Err(BngError::HierarchyDirection)` if the target is not coarser.
pub fn bng_to_parent_at(
    reference: &GridReference,
    resolution: impl Into<ResolutionSpec>,
) -> Result<GridReference> {
    if reference.resolution().coarser().is_none() {
        return Err(boundary(reference, HierarchyDirection::Parent));
    }
    let target = resolve(resolution)?;
    if !reference.resolution().is_finer_than(target) {
        return Err(BngError::HierarchyDirection {
            reference: reference.compact().to_owned(),
            resolution: reference.resolution(),
            requested: target,
            direction: HierarchyDirection::Parent,
            expected: "coarser",
        });
    }
    parent_at(reference, target)
}

fn parent_at(reference: &GridReference, target: Resolution) -> Result<GridReference> {
    let (x, y) = bng_to_xy(reference, Corner::LowerLeft);
    encode(x, y, target)
}
