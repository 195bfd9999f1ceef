//! Geometry indexing over the British National Grid.
//!
//! Converts `geo_types` geometries into the grid cells that cover them:
//!
//! - [`decompose`] flattens multi-part geometries into [`Primitive`]s
//! - [`geom_to_bng`] returns the cells a geometry touches
//! - [`geom_to_bng_intersection`] additionally clips the geometry to each
//!   cell and marks cells wholly inside a polygon as core
//! - [`bng_to_grid_geom`] turns a reference back into its cell square
//!
//! Predicates and clipping are delegated to the `geo` crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod decompose;
pub mod indexer;

pub use cell::bng_to_grid_geom;
pub use decompose::{decompose, Primitive};
pub use indexer::{geom_to_bng, geom_to_bng_intersection, IndexedGeometry};
