//! Core types for the British National Grid spatial index.
//!
//! This is the leaf crate of the workspace. It owns the static tables (the
//! eleven resolutions, the 100km letter grid, the quadrant suffixes), the
//! [`GridReference`] value type, and the codec that converts between
//! coordinates, reference strings and cell boxes.
//!
//! All operations are pure functions over immutable inputs. Hard failures
//! are [`BngError`]s; clamping and edge-of-grid drops are returned as
//! [`Diagnostic`]s inside a [`Diagnosed`] result and logged via `tracing`.
//!
//! # Extent
//!
//! Valid coordinates satisfy `0 <= easting < 700000` and
//! `0 <= northing < 1300000` (see [`EXTENT`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bbox;
pub mod codec;
pub mod diagnostic;
pub mod error;
pub mod prefix;
pub mod reference;
pub mod resolution;

pub use bbox::{bbox_cells, bbox_to_bng, normalise_bbox, BoundingBox, EXTENT};
pub use codec::{
    bng_to_bbox, bng_to_xy, encode, validate_easting_northing, xy_to_bng, Corner, MAX_EASTING,
    MAX_NORTHING,
};
pub use diagnostic::{Diagnosed, Diagnostic};
pub use error::{BngError, HierarchyDirection, Result};
pub use prefix::Prefix;
pub use reference::{is_valid_reference, GridReference, Quadrant};
pub use resolution::{resolve, Resolution, ResolutionSpec};
