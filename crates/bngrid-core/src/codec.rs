//! Coordinate ⇄ grid reference conversion.
//!
//! Encoding picks the 100km square from the letter table, then bins the
//! remainder of each coordinate at the resolution's digit-bin width. A
//! quadrant resolution shares the digit bins of the standard level above it
//! and records which half of the bin the point falls in, per axis, as an
//! NE/SE/SW/NW suffix.
//!
//! Decoding sums the same three offsets back into the cell's lower-left
//! corner and then moves to the requested [`Corner`].

use crate::bbox::BoundingBox;
use crate::error::{BngError, Result};
use crate::prefix::Prefix;
use crate::reference::{GridReference, Quadrant};
use crate::resolution::{resolve, Resolution, ResolutionSpec};
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound of valid eastings, in metres.
pub const MAX_EASTING: f64 = 700_000.0;

/// Exclusive upper bound of valid northings, in metres.
pub const MAX_NORTHING: f64 = 1_300_000.0;

const SQUARE: f64 = 100_000.0;

/// Which point of a cell to return when decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Corner {
    /// South-west corner (the cell origin).
    #[default]
    LowerLeft,
    /// North-west corner.
    UpperLeft,
    /// North-east corner.
    UpperRight,
    /// South-east corner.
    LowerRight,
    /// Cell centroid.
    Centre,
}

impl Corner {
    /// The token accepted by [`FromStr`], e.g. `"lower-left"`.
    pub fn token(self) -> &'static str {
        match self {
            Corner::LowerLeft => "lower-left",
            Corner::UpperLeft => "upper-left",
            Corner::UpperRight => "upper-right",
            Corner::LowerRight => "lower-right",
            Corner::Centre => "centre",
        }
    }
}

impl FromStr for Corner {
    type Err = BngError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lower-left" => Ok(Corner::LowerLeft),
            "upper-left" => Ok(Corner::UpperLeft),
            "upper-right" => Ok(Corner::UpperRight),
            "lower-right" => Ok(Corner::LowerRight),
            "centre" => Ok(Corner::Centre),
            _ => Err(BngError::InvalidCornerToken {
                token: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Check that a coordinate lies within `[0, 700000) x [0, 1300000)`.
///
/// NaN and infinite values are rejected as out of extent.
pub fn validate_easting_northing(easting: f64, northing: f64) -> Result<()> {
    let inside = (0.0..MAX_EASTING).contains(&easting) && (0.0..MAX_NORTHING).contains(&northing);
    if inside {
        Ok(())
    } else {
        Err(BngError::OutOfExtent { easting, northing })
    }
}

/// Encode a coordinate as the reference of the cell containing it.
///
/// # Examples
///
/// ```
/// use bngrid_core::xy_to_bng;
///
/// assert_eq!(xy_to_bng(437289.0, 115541.0, "100km").unwrap().formatted(), "SU");
/// assert_eq!(xy_to_bng(437289.0, 115541.0, "10km").unwrap().formatted(), "SU 3 1");
/// assert_eq!(xy_to_bng(437289.0, 115541.0, "5km").unwrap().formatted(), "SU 3 1 NE");
/// assert_eq!(xy_to_bng(437289.0, 115541.0, 1).unwrap().formatted(), "SU 37289 15541");
/// ```
pub fn xy_to_bng(
    easting: f64,
    northing: f64,
    resolution: impl Into<ResolutionSpec>,
) -> Result<GridReference> {
    let resolution = resolve(resolution)?;
    encode(easting, northing, resolution)
}

/// [`xy_to_bng`] for an already-resolved [`Resolution`].
pub fn encode(easting: f64, northing: f64, resolution: Resolution) -> Result<GridReference> {
    validate_easting_northing(easting, northing)?;

    let column = (easting / SQUARE).floor() as usize;
    let row = (northing / SQUARE).floor() as usize;
    let prefix = Prefix::at(column, row).ok_or(BngError::OutOfExtent { easting, northing })?;

    let e_off = easting - prefix.easting_origin() as f64;
    let n_off = northing - prefix.northing_origin() as f64;
    let bin = resolution.bin_metres() as f64;
    let e_bin = (e_off / bin).floor();
    let n_bin = (n_off / bin).floor();

    let width = resolution.digits_per_axis();
    let mut compact = String::with_capacity(2 + 2 * width + 2);
    compact.push_str(prefix.letters());
    if width > 0 {
        compact.push_str(&format!(
            "{:0w$}{:0w$}",
            e_bin as u32,
            n_bin as u32,
            w = width
        ));
    }
    if resolution.is_quadrant() {
        let half = resolution.metres() as f64;
        let east = e_off - e_bin * bin >= half;
        let north = n_off - n_bin * bin >= half;
        compact.push_str(Quadrant::from_halves(east, north).letters());
    }

    GridReference::parse(&compact)
}

/// Decode a reference to a coordinate of its cell.
///
/// # Examples
///
/// ```
/// use bngrid_core::{bng_to_xy, Corner, GridReference};
///
/// let su = GridReference::parse("SU").unwrap();
/// assert_eq!(bng_to_xy(&su, Corner::LowerLeft), (400000.0, 100000.0));
/// assert_eq!(bng_to_xy(&su, Corner::UpperRight), (500000.0, 200000.0));
/// assert_eq!(bng_to_xy(&su, "centre".parse().unwrap()), (450000.0, 150000.0));
/// ```
pub fn bng_to_xy(reference: &GridReference, corner: Corner) -> (f64, f64) {
    let resolution = reference.resolution();
    let res = resolution.metres();
    let bin = resolution.bin_metres();
    let prefix = reference.prefix();
    let (e_bin, n_bin) = reference.digit_bins();
    let (e_quad, n_quad) = reference
        .quadrant()
        .map_or((0, 0), |q| (q.east_index(), q.north_index()));

    let x = prefix.easting_origin() + e_bin * bin + e_quad * res;
    let y = prefix.northing_origin() + n_bin * bin + n_quad * res;
    let (x, y) = (x as f64, y as f64);
    let res = res as f64;

    match corner {
        Corner::LowerLeft => (x, y),
        Corner::UpperLeft => (x, y + res),
        Corner::UpperRight => (x + res, y + res),
        Corner::LowerRight => (x + res, y),
        Corner::Centre => (x + res / 2.0, y + res / 2.0),
    }
}

/// The cell's bounding box: lower-left to upper-right.
pub fn bng_to_bbox(reference: &GridReference) -> BoundingBox {
    let (xmin, ymin) = bng_to_xy(reference, Corner::LowerLeft);
    let (xmax, ymax) = bng_to_xy(reference, Corner::UpperRight);
    BoundingBox::new(xmin, ymin, xmax, ymax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn r(s: &str) -> GridReference {
        GridReference::parse(s).unwrap()
    }

    // ── Encode ──────────────────────────────────────────────────

    #[test]
    fn encode_every_level_of_one_point() {
        let expected = [
            (Resolution::Km100, "SU"),
            (Resolution::Km50, "SU SW"),
            (Resolution::Km10, "SU 3 1"),
            (Resolution::Km5, "SU 3 1 NE"),
            (Resolution::Km1, "SU 37 15"),
            (Resolution::M500, "SU 37 15 NW"),
            (Resolution::M100, "SU 372 155"),
            (Resolution::M50, "SU 372 155 SE"),
            (Resolution::M10, "SU 3728 1554"),
            (Resolution::M5, "SU 3728 1554 SE"),
            (Resolution::M1, "SU 37289 15541"),
        ];
        for (res, s) in expected {
            assert_eq!(encode(437289.0, 115541.0, res).unwrap().formatted(), s, "{res}");
        }
    }

    #[test]
    fn encode_pads_with_leading_zeros() {
        assert_eq!(encode(400001.0, 100002.0, Resolution::M1).unwrap().compact(), "SU0000100002");
        assert_eq!(encode(0.0, 0.0, Resolution::Km1).unwrap().compact(), "SV0000");
    }

    #[test]
    fn encode_extent_corners() {
        assert_eq!(encode(0.0, 0.0, Resolution::Km100).unwrap().compact(), "SV");
        assert_eq!(
            encode(699_999.0, 1_299_999.0, Resolution::M1).unwrap().compact(),
            "JM9999999999"
        );
    }

    #[test]
    fn encode_rejects_out_of_extent() {
        for (e, n) in [
            (-1.0, 0.0),
            (0.0, -0.5),
            (700_000.0, 0.0),
            (0.0, 1_300_000.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            assert!(matches!(
                encode(e, n, Resolution::Km1),
                Err(BngError::OutOfExtent { .. })
            ));
        }
    }

    #[test]
    fn encode_rejects_bad_resolution() {
        assert!(matches!(
            xy_to_bng(1.0, 1.0, 2),
            Err(BngError::UnsupportedResolution { .. })
        ));
    }

    #[test]
    fn quadrant_bisection_uses_half_open_halves() {
        // Exactly on the bin midpoint falls in the upper half.
        assert_eq!(encode(405_000.0, 105_000.0, Resolution::Km5).unwrap().compact(), "SU00NE");
        assert_eq!(encode(404_999.0, 104_999.0, Resolution::Km5).unwrap().compact(), "SU00SW");
        assert_eq!(encode(405_000.0, 104_999.0, Resolution::Km5).unwrap().compact(), "SU00SE");
        assert_eq!(encode(404_999.0, 105_000.0, Resolution::Km5).unwrap().compact(), "SU00NW");
        assert_eq!(encode(450_000.0, 150_000.0, Resolution::Km50).unwrap().compact(), "SUNE");
    }

    #[test]
    fn encode_handles_fractional_coordinates() {
        assert_eq!(encode(437289.9, 115541.4, Resolution::M1).unwrap().compact(), "SU3728915541");
        assert_eq!(encode(437284.5, 115545.0, Resolution::M5).unwrap().compact(), "SU37281554NW");
    }

    // ── Decode ──────────────────────────────────────────────────

    #[test]
    fn decode_corners_of_100km_square() {
        let su = r("SU");
        assert_eq!(bng_to_xy(&su, Corner::LowerLeft), (400000.0, 100000.0));
        assert_eq!(bng_to_xy(&su, Corner::UpperLeft), (400000.0, 200000.0));
        assert_eq!(bng_to_xy(&su, Corner::UpperRight), (500000.0, 200000.0));
        assert_eq!(bng_to_xy(&su, Corner::LowerRight), (500000.0, 100000.0));
        assert_eq!(bng_to_xy(&su, Corner::Centre), (450000.0, 150000.0));
    }

    #[test]
    fn decode_quadrant_offsets() {
        assert_eq!(bng_to_xy(&r("SUNE"), Corner::LowerLeft), (450000.0, 150000.0));
        assert_eq!(bng_to_xy(&r("SU31NE"), Corner::LowerLeft), (435000.0, 115000.0));
        assert_eq!(bng_to_xy(&r("SU31SE"), Corner::UpperRight), (440000.0, 115000.0));
        assert_eq!(bng_to_xy(&r("SU37281554SE"), Corner::LowerLeft), (437285.0, 115540.0));
    }

    #[test]
    fn decode_centre_of_1m_cell_is_fractional() {
        assert_eq!(bng_to_xy(&r("SU3728915541"), Corner::Centre), (437289.5, 115541.5));
        assert_eq!(bng_to_xy(&r("SU37281554SE"), Corner::Centre), (437287.5, 115542.5));
    }

    #[test]
    fn corner_tokens() {
        for c in [
            Corner::LowerLeft,
            Corner::UpperLeft,
            Corner::UpperRight,
            Corner::LowerRight,
            Corner::Centre,
        ] {
            assert_eq!(c.token().parse::<Corner>().unwrap(), c);
        }
        assert!(matches!(
            "center".parse::<Corner>(),
            Err(BngError::InvalidCornerToken { token }) if token == "center"
        ));
        assert_eq!(Corner::default(), Corner::LowerLeft);
    }

    #[test]
    fn bbox_spans_one_cell() {
        let b = bng_to_bbox(&r("SU 3 1 NE"));
        assert_eq!(b, BoundingBox::new(435000.0, 115000.0, 440000.0, 120000.0));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_resolution() -> impl Strategy<Value = Resolution> {
        prop::sample::select(Resolution::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn encode_decode_is_idempotent(
            e in 0.0f64..700_000.0,
            n in 0.0f64..1_300_000.0,
            res in arb_resolution(),
        ) {
            let g = encode(e, n, res).unwrap();
            prop_assert_eq!(g.resolution(), res);
            let (x, y) = bng_to_xy(&g, Corner::LowerLeft);
            let size = res.metres() as f64;
            prop_assert_eq!(x % size, 0.0);
            prop_assert_eq!(y % size, 0.0);
            prop_assert_eq!(encode(x, y, res).unwrap(), g);
        }

        #[test]
        fn cell_contains_encoded_point(
            e in 0.0f64..700_000.0,
            n in 0.0f64..1_300_000.0,
            res in arb_resolution(),
        ) {
            let b = bng_to_bbox(&encode(e, n, res).unwrap());
            prop_assert!(b.xmin <= e && e < b.xmax);
            prop_assert!(b.ymin <= n && n < b.ymax);
            prop_assert_eq!(b.xmax - b.xmin, res.metres() as f64);
        }
    }
}
