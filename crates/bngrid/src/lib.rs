//! bngrid: a hierarchical spatial index over the British National Grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! bngrid sub-crates. For most users, adding `bngrid` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use bngrid::prelude::*;
//!
//! // Encode a coordinate at 5km and walk the hierarchy.
//! let r = xy_to_bng(437289.0, 115541.0, "5km").unwrap();
//! assert_eq!(r.formatted(), "SU 3 1 NE");
//! assert_eq!(bng_to_parent(&r).unwrap().formatted(), "SU 3 1");
//! assert_eq!(bng_to_children(&r).unwrap().len(), 25);
//!
//! // Neighbourhoods and distances are counted in cells of the same size.
//! let cell = GridReference::parse("SU1234").unwrap();
//! assert_eq!(bng_kring(&cell, 1).unwrap().value.len(), 8);
//! let other = GridReference::parse("SU1334").unwrap();
//! assert_eq!(bng_distance(&cell, &other, DistanceMetric::Centroid), 1000.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `bngrid-core` | Resolutions, references, codec, bbox enumeration, errors |
//! | [`space`] | `bngrid-space` | Parent/child navigation, neighbours, rings, distances |
//! | [`index`] | `bngrid-index` | Geometry decomposition and cell intersection |
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`grid::GridReference`],
//!   [`grid::Resolution`], [`grid::BoundingBox`] and [`grid::Corner`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Resolutions, grid references and the coordinate codec (`bngrid-core`).
///
/// Also holds [`grid::BngError`] and the [`grid::Diagnosed`] wrapper
/// returned by operations that may clamp or drop cells.
pub use bngrid_core as grid;

/// Hierarchy and neighbourhood traversal (`bngrid-space`).
pub use bngrid_space as space;

/// Geometry indexing (`bngrid-index`).
///
/// Works on `geo_types::Geometry<f64>` in British National Grid metres.
pub use bngrid_index as index;

/// Common imports for typical bngrid usage.
///
/// ```rust
/// use bngrid::prelude::*;
/// ```
pub mod prelude {
    // References and codec
    pub use bngrid_core::{
        bbox_to_bng, bng_to_bbox, bng_to_xy, xy_to_bng, BoundingBox, Corner, GridReference,
        Resolution, ResolutionSpec,
    };

    // Errors and diagnostics
    pub use bngrid_core::{BngError, Diagnosed, Diagnostic};

    // Hierarchy and traversal
    pub use bngrid_space::{
        bng_distance, bng_dwithin, bng_is_neighbour, bng_kdisc, bng_kring, bng_neighbours,
        bng_to_children, bng_to_children_at, bng_to_parent, bng_to_parent_at, DistanceMetric,
    };

    // Geometry
    pub use bngrid_index::{
        bng_to_grid_geom, geom_to_bng, geom_to_bng_intersection, IndexedGeometry,
    };
}
