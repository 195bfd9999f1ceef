//! Hierarchy and neighbourhood traversal for British National Grid
//! references.
//!
//! Builds on the codec in [`bngrid_core`]; every operation here is a pure
//! function of its inputs.
//!
//! # Hierarchy
//!
//! - [`bng_to_children`] / [`bng_to_children_at`]: finer cells covering a
//!   reference
//! - [`bng_to_parent`] / [`bng_to_parent_at`]: the coarser cell containing
//!   it
//!
//! # Traversal
//!
//! Neighbourhoods are counted in cells of the reference's own resolution
//! and cross 100km square boundaries transparently. Cells that would fall
//! off the grid are dropped and reported as a
//! [`Diagnostic`](bngrid_core::Diagnostic).
//!
//! - [`bng_neighbours`], [`bng_is_neighbour`]: edge adjacency
//! - [`bng_kring`], [`bng_kdisc`]: Chebyshev rings and discs
//! - [`bng_distance`], [`bng_dwithin`]: metric queries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hierarchy;
pub mod traversal;

#[cfg(test)]
pub(crate) mod compliance;

pub use hierarchy::{bng_to_children, bng_to_children_at, bng_to_parent, bng_to_parent_at};
pub use traversal::{
    bng_distance, bng_dwithin, bng_is_neighbour, bng_kdisc, bng_kring, bng_neighbours,
    DistanceMetric,
};
