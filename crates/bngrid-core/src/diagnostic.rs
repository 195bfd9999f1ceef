//! Non-fatal diagnostics returned alongside results.
//!
//! Hard failures are [`BngError`](crate::BngError)s. Events that trim a
//! result without invalidating it (clamping a bbox to the extent, dropping
//! cells that fall off the grid edge) are reported here instead, and each is
//! also logged at `WARN` through `tracing` when it is raised.

use crate::bbox::BoundingBox;
use std::fmt;

/// A non-fatal event raised while computing a result.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A bounding box extended beyond the grid extent and was clamped.
    BboxClamped {
        /// The box as supplied.
        requested: BoundingBox,
        /// The box after clamping to the extent.
        clamped: BoundingBox,
    },
    /// Cells that would lie outside the extent were left out of the result.
    CellsOutsideExtent {
        /// How many cells were dropped.
        dropped: usize,
    },
}

impl Diagnostic {
    /// Raise a clamp diagnostic, logging it.
    pub(crate) fn bbox_clamped(requested: BoundingBox, clamped: BoundingBox) -> Self {
        tracing::warn!(
            requested = %requested,
            clamped = %clamped,
            "bounding box extends beyond the grid extent; clamped"
        );
        Diagnostic::BboxClamped { requested, clamped }
    }

    /// Raise a dropped-cells diagnostic, logging it.
    pub fn cells_outside_extent(dropped: usize) -> Self {
        tracing::warn!(
            dropped,
            "one or more requested cells fall outside the grid extent and were not returned"
        );
        Diagnostic::CellsOutsideExtent { dropped }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BboxClamped { requested, clamped } => {
                write!(f, "bounding box {requested} clamped to {clamped}")
            }
            Self::CellsOutsideExtent { dropped } => {
                write!(f, "{dropped} cell(s) outside the grid extent were dropped")
            }
        }
    }
}

/// A result value plus the diagnostics raised while producing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnosed<T> {
    /// The computed value.
    pub value: T,
    /// Non-fatal events, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Diagnosed<T> {
    /// Wrap a value with no diagnostics.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// Wrap a value with the given diagnostics.
    pub fn with(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// `true` if any diagnostic was raised.
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Discard the diagnostics.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transform the value, keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Diagnosed<U> {
        Diagnosed {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Move this result's diagnostics into `sink` and return the value.
    pub fn drain_into(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_has_no_warnings() {
        let d = Diagnosed::clean(3);
        assert!(!d.has_warnings());
        assert_eq!(d.into_value(), 3);
    }

    #[test]
    fn drain_moves_diagnostics() {
        let mut sink = Vec::new();
        let d = Diagnosed::with(vec![1, 2], vec![Diagnostic::cells_outside_extent(2)]);
        let v = d.map(|v| v.len()).drain_into(&mut sink);
        assert_eq!(v, 2);
        assert_eq!(sink, vec![Diagnostic::CellsOutsideExtent { dropped: 2 }]);
    }

    #[test]
    fn display_is_readable() {
        let d = Diagnostic::CellsOutsideExtent { dropped: 3 };
        assert_eq!(d.to_string(), "3 cell(s) outside the grid extent were dropped");
    }
}
