//! Error types for grid reference parsing, encoding and navigation.
//!
//! Every hard failure the engine can report is a [`BngError`] variant.
//! Soft events (bbox clamping, cells dropped at the extent edge) are not
//! errors; they travel as [`Diagnostic`](crate::Diagnostic) values instead.

use crate::resolution::Resolution;
use std::fmt;
use thiserror::Error;

/// Direction of a hierarchy query, used to describe hierarchy failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HierarchyDirection {
    /// Towards finer resolutions (children).
    Children,
    /// Towards coarser resolutions (parent).
    Parent,
}

impl fmt::Display for HierarchyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Children => write!(f, "children"),
            Self::Parent => write!(f, "parent"),
        }
    }
}

/// Errors arising from grid reference operations.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum BngError {
    /// A reference string does not match the grid reference grammar.
    #[error("invalid grid reference format: '{input}'")]
    InvalidReferenceFormat {
        /// The rejected input.
        input: String,
    },

    /// A resolution token is neither a supported metre value nor a label.
    #[error(
        "unsupported resolution '{token}'; supported resolutions are: \
         metres {metres}; labels {labels}",
        metres = supported_metres(),
        labels = supported_labels()
    )]
    UnsupportedResolution {
        /// The rejected token, rendered as text.
        token: String,
    },

    /// A coordinate lies outside `[0, 700000) x [0, 1300000)`.
    #[error(
        "coordinate ({easting}, {northing}) outside the grid extent; \
         expected 0 <= easting < 700000 and 0 <= northing < 1300000"
    )]
    OutOfExtent {
        /// Offending easting.
        easting: f64,
        /// Offending northing.
        northing: f64,
    },

    /// Children requested from the finest level, or parent from the coarsest.
    #[error("{reference} is at {resolution}, which has no {direction}")]
    HierarchyBoundary {
        /// Compact form of the input reference.
        reference: String,
        /// Resolution of the input reference.
        resolution: Resolution,
        /// Which way the query was heading.
        direction: HierarchyDirection,
    },

    /// An explicit target resolution points the wrong way.
    #[error(
        "cannot derive {direction} of {reference} ({resolution}) at {requested}: \
         resolution must be strictly {expected} than the input"
    )]
    HierarchyDirection {
        /// Compact form of the input reference.
        reference: String,
        /// Resolution of the input reference.
        resolution: Resolution,
        /// The requested target resolution.
        requested: Resolution,
        /// Which way the query was heading.
        direction: HierarchyDirection,
        /// `"finer"` or `"coarser"`.
        expected: &'static str,
    },

    /// Neighbour comparison between references at different resolutions.
    #[error("cannot compare {a} ({a_resolution}) with {b} ({b_resolution}): resolutions differ")]
    NeighbourResolutionMismatch {
        /// Compact form of the first reference.
        a: String,
        /// Resolution of the first reference.
        a_resolution: Resolution,
        /// Compact form of the second reference.
        b: String,
        /// Resolution of the second reference.
        b_resolution: Resolution,
    },

    /// A geometry primitive outside Point, LineString and Polygon (and their
    /// multi-part collections).
    #[error("unsupported geometry type: {kind}")]
    UnsupportedGeometryType {
        /// Name of the rejected geometry type.
        kind: &'static str,
    },

    /// Unknown corner name passed to coordinate decoding.
    #[error(
        "invalid corner '{token}'; expected one of lower-left, upper-left, \
         upper-right, lower-right, centre"
    )]
    InvalidCornerToken {
        /// The rejected token.
        token: String,
    },

    /// Ring or disc radius must be a positive number of cells.
    #[error("k must be a positive integer, got {k}")]
    InvalidRingRadius {
        /// The rejected radius.
        k: u32,
    },

    /// Distance threshold must be finite and non-negative.
    #[error("distance must be finite and non-negative, got {distance}")]
    InvalidDistance {
        /// The rejected distance.
        distance: f64,
    },
}

/// Result type for grid reference operations.
pub type Result<T> = std::result::Result<T, BngError>;

fn supported_metres() -> String {
    Resolution::ALL
        .iter()
        .map(|r| r.metres().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn supported_labels() -> String {
    Resolution::ALL
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ")
}
