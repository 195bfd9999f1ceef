//! Grid reference value type and the reference-string grammar.
//!
//! A reference is `PREFIX [ws] DIGITS? [ws] SUFFIX?`:
//!
//! - `PREFIX`: one of the 91 two-letter 100km square codes.
//! - `DIGITS`: 2, 4, 6, 8 or 10 digits, optionally split into two equal
//!   halves by a single whitespace character. The first half is the easting
//!   bin, the second the northing bin.
//! - `SUFFIX`: `NE`, `SE`, `SW` or `NW`, marking a quadrant resolution.
//!
//! Anything else is rejected. Internally a reference is stored compact
//! (whitespace-free); [`GridReference::formatted`] re-inserts single spaces.

use crate::error::{BngError, Result};
use crate::prefix::Prefix;
use crate::resolution::Resolution;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

/// Quadrant suffix of a reference at an intermediate resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// Lower-left quarter.
    SW,
    /// Lower-right quarter.
    SE,
    /// Upper-left quarter.
    NW,
    /// Upper-right quarter.
    NE,
}

impl Quadrant {
    /// All quadrants in south-to-north, west-to-east order.
    pub const ALL: [Quadrant; 4] = [Quadrant::SW, Quadrant::SE, Quadrant::NW, Quadrant::NE];

    /// Quadrant for the given half along each axis.
    pub fn from_halves(east: bool, north: bool) -> Quadrant {
        match (east, north) {
            (false, false) => Quadrant::SW,
            (true, false) => Quadrant::SE,
            (false, true) => Quadrant::NW,
            (true, true) => Quadrant::NE,
        }
    }

    /// Parse a two-letter suffix.
    pub fn from_letters(letters: &str) -> Option<Quadrant> {
        match letters {
            "SW" => Some(Quadrant::SW),
            "SE" => Some(Quadrant::SE),
            "NW" => Some(Quadrant::NW),
            "NE" => Some(Quadrant::NE),
            _ => None,
        }
    }

    /// The two-letter suffix.
    pub fn letters(self) -> &'static str {
        match self {
            Quadrant::SW => "SW",
            Quadrant::SE => "SE",
            Quadrant::NW => "NW",
            Quadrant::NE => "NE",
        }
    }

    /// `1` for the eastern half, `0` for the western.
    pub fn east_index(self) -> u32 {
        matches!(self, Quadrant::SE | Quadrant::NE) as u32
    }

    /// `1` for the northern half, `0` for the southern.
    pub fn north_index(self) -> u32 {
        matches!(self, Quadrant::NW | Quadrant::NE) as u32
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letters())
    }
}

/// A validated, canonical grid cell identifier.
///
/// The only ways to obtain one are [`GridReference::parse`] (and its
/// `FromStr`/`TryFrom` wrappers) or the codec functions, which route
/// through the same validation. Two references are equal iff their compact
/// strings are equal.
///
/// # Examples
///
/// ```
/// use bngrid_core::{GridReference, Resolution};
///
/// let r = GridReference::parse("SU 3 1 NE").unwrap();
/// assert_eq!(r.compact(), "SU31NE");
/// assert_eq!(r.formatted(), "SU 3 1 NE");
/// assert_eq!(r.resolution(), Resolution::Km5);
/// assert_eq!(r.resolution_label(), "5km");
/// assert_eq!(r, "SU31NE".parse().unwrap());
/// ```
#[derive(Clone)]
pub struct GridReference {
    compact: String,
    prefix: Prefix,
    easting_bin: u32,
    northing_bin: u32,
    quadrant: Option<Quadrant>,
    resolution: Resolution,
}

impl GridReference {
    /// Parse and validate a reference string.
    ///
    /// Returns `Err(BngError::InvalidReferenceFormat)` for any input outside
    /// the grammar described in the [module docs](self).
    pub fn parse(input: &str) -> Result<GridReference> {
        parse_components(input).ok_or_else(|| BngError::InvalidReferenceFormat {
            input: input.to_owned(),
        })
    }

    /// Whitespace-free form, e.g. `"SU31NE"`.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Human form with single spaces between components, e.g. `"SU 3 1 NE"`.
    pub fn formatted(&self) -> String {
        let width = self.resolution.digits_per_axis();
        let mut out = String::with_capacity(self.compact.len() + 3);
        out.push_str(self.prefix.letters());
        if width > 0 {
            let digits = &self.compact[2..2 + 2 * width];
            out.push(' ');
            out.push_str(&digits[..width]);
            out.push(' ');
            out.push_str(&digits[width..]);
        }
        if let Some(q) = self.quadrant {
            out.push(' ');
            out.push_str(q.letters());
        }
        out
    }

    /// Resolution implied by the digit count and suffix.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Cell edge length in metres.
    pub fn resolution_metres(&self) -> u32 {
        self.resolution.metres()
    }

    /// Resolution label, e.g. `"5km"`.
    pub fn resolution_label(&self) -> &'static str {
        self.resolution.label()
    }

    /// The 100km square this cell lies in.
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    /// Quadrant suffix, present only at intermediate resolutions.
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Easting and northing digit-bin values (zero for 100km and 50km).
    pub fn digit_bins(&self) -> (u32, u32) {
        (self.easting_bin, self.northing_bin)
    }
}

/// `true` if `input` is a valid reference string.
///
/// ```
/// use bngrid_core::is_valid_reference;
///
/// assert!(is_valid_reference("TQ12"));
/// assert!(!is_valid_reference("TQ123"));
/// ```
pub fn is_valid_reference(input: &str) -> bool {
    parse_components(input).is_some()
}

/// The reference grammar. Captures: 1 prefix letters, 2/3 space-split
/// easting/northing digits, 4 unsplit digit run, 5 quadrant suffix.
///
/// Whitespace and digit classes are ASCII-only. At most one whitespace
/// character may sit on either side of the digit block, so `"SU  NE"`
/// (empty block) matches while `"SU  12"` does not.
static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z]{2})[\t\n\x0B\x0C\r ]?(?:([0-9]{1,5})[\t\n\x0B\x0C\r ]([0-9]{1,5})|([0-9]{2,10}))?[\t\n\x0B\x0C\r ]?(NE|SE|SW|NW)?$",
    )
    .expect("reference pattern compiles")
});

fn parse_components(input: &str) -> Option<GridReference> {
    let caps = REFERENCE_PATTERN.captures(input)?;
    let letters = caps.get(1)?.as_str();
    let prefix = Prefix::from_letters(letters)?;

    let (easting_digits, northing_digits) = match (caps.get(2), caps.get(3), caps.get(4)) {
        (Some(e), Some(n), None) if e.len() == n.len() => (e.as_str(), n.as_str()),
        (None, None, Some(run)) if run.len() % 2 == 0 => run.as_str().split_at(run.len() / 2),
        (None, None, None) => ("", ""),
        _ => return None,
    };
    let quadrant = match caps.get(5) {
        Some(m) => Some(Quadrant::from_letters(m.as_str())?),
        None => None,
    };

    let width = easting_digits.len();
    let mut metres = 10u32.pow(5 - width as u32);
    if quadrant.is_some() {
        metres /= 2;
    }
    let resolution = Resolution::from_metres(metres)?;

    let mut compact = String::with_capacity(2 + 2 * width + 2);
    compact.push_str(letters);
    compact.push_str(easting_digits);
    compact.push_str(northing_digits);
    if let Some(q) = quadrant {
        compact.push_str(q.letters());
    }

    Some(GridReference {
        compact,
        prefix,
        easting_bin: easting_digits.parse().unwrap_or(0),
        northing_bin: northing_digits.parse().unwrap_or(0),
        quadrant,
        resolution,
    })
}

impl PartialEq for GridReference {
    fn eq(&self, other: &Self) -> bool {
        self.compact == other.compact
    }
}

impl Eq for GridReference {}

impl Hash for GridReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.compact.hash(state);
    }
}

impl PartialOrd for GridReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compact.cmp(&other.compact)
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl fmt::Debug for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridReference({}, {})",
            self.formatted(),
            self.resolution.label()
        )
    }
}

impl FromStr for GridReference {
    type Err = BngError;

    fn from_str(s: &str) -> Result<Self> {
        GridReference::parse(s)
    }
}

impl TryFrom<&str> for GridReference {
    type Error = BngError;

    fn try_from(s: &str) -> Result<Self> {
        GridReference::parse(s)
    }
}

impl AsRef<str> for GridReference {
    fn as_ref(&self) -> &str {
        &self.compact
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GridReference {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.compact)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridReference {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        GridReference::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn r(s: &str) -> GridReference {
        GridReference::parse(s).unwrap()
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn accepts_every_well_formed_shape() {
        for ok in [
            "SU",
            "SUNE",
            "SU NE",
            "SU31",
            "SU 3 1",
            "SU31NE",
            "SU 3 1 NE",
            "SU3115",
            "SU 31 15",
            "SU 311 155",
            "SU37281554",
            "SU 3728 1554 SW",
            "SU3728915541",
            "SU 37289 15541",
            "HL",
            "JM99",
            "NENE",
        ] {
            assert!(is_valid_reference(ok), "{ok:?} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "",
            "S",
            "su",
            "tq123",
            "TQ123",
            "TQ 12 3",
            "TQ1 23",
            "SI12",
            "AA12",
            "HA",
            "SU  12",
            "SU 1  2",
            "SU12  NE",
            "SU12N",
            "SU12ne",
            "SU12NN",
            "SU12NE ",
            "SU123456789012",
            "SU 123456 123456",
            " SU12",
            "SU-12",
            "SU１２",
            "SU12\u{00a0}34",
        ] {
            assert!(!is_valid_reference(bad), "{bad:?} should be invalid");
            assert!(matches!(
                GridReference::parse(bad),
                Err(BngError::InvalidReferenceFormat { input }) if input == bad
            ));
        }
    }

    #[test]
    fn whitespace_may_be_tab() {
        assert_eq!(r("SU\t31\t15"), r("SU3115"));
    }

    #[test]
    fn one_separator_either_side_of_digit_block() {
        // With no digits the two optional separators sit side by side.
        assert_eq!(r("SU  NE"), r("SUNE"));
        assert_eq!(r("SU "), r("SU"));
        assert_eq!(r("SU12 "), r("SU12"));
        assert!(!is_valid_reference("SU  12"));
        assert!(!is_valid_reference("SU   NE"));
        assert!(!is_valid_reference("SU12\n\nNE"));
    }

    #[test]
    fn metre_digits_take_no_quadrant() {
        for bad in ["SU3728915541NE", "SU 37289 15541 SW", "SV0000000000SW"] {
            assert!(matches!(
                GridReference::parse(bad),
                Err(BngError::InvalidReferenceFormat { .. })
            ));
        }
    }

    // ── Resolution derivation ───────────────────────────────────

    #[test]
    fn resolution_from_digits_and_suffix() {
        let cases = [
            ("SU", Resolution::Km100),
            ("SUNE", Resolution::Km50),
            ("SU31", Resolution::Km10),
            ("SU31NE", Resolution::Km5),
            ("SU3715", Resolution::Km1),
            ("SU3715SW", Resolution::M500),
            ("SU372155", Resolution::M100),
            ("SU372155NW", Resolution::M50),
            ("SU37281554", Resolution::M10),
            ("SU37281554SE", Resolution::M5),
            ("SU3728915541", Resolution::M1),
        ];
        for (s, res) in cases {
            assert_eq!(r(s).resolution(), res, "{s}");
        }
    }

    // ── Canonical forms ─────────────────────────────────────────

    #[test]
    fn compact_and_formatted() {
        let cases = [
            ("SU", "SU", "SU"),
            ("SU NE", "SUNE", "SU NE"),
            ("SU 3 1", "SU31", "SU 3 1"),
            ("SU31 NE", "SU31NE", "SU 3 1 NE"),
            ("SU 3728915541", "SU3728915541", "SU 37289 15541"),
            ("SU 37289 15541", "SU3728915541", "SU 37289 15541"),
        ];
        for (input, compact, formatted) in cases {
            let g = r(input);
            assert_eq!(g.compact(), compact);
            assert_eq!(g.formatted(), formatted);
            assert_eq!(g.to_string(), formatted);
        }
    }

    #[test]
    fn equality_ignores_input_spacing() {
        assert_eq!(r("SU 372 155"), r("SU372155"));
        assert_ne!(r("SU31"), r("SU31NE"));
    }

    #[test]
    fn components_exposed() {
        let g = r("SU 3728 1554 SE");
        assert_eq!(g.prefix().letters(), "SU");
        assert_eq!(g.digit_bins(), (3728, 1554));
        assert_eq!(g.quadrant(), Some(Quadrant::SE));
        assert_eq!(format!("{g:?}"), "GridReference(SU 3728 1554 SE, 5m)");
    }

    #[test]
    fn quadrant_axis_bits() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_halves(q.east_index() == 1, q.north_index() == 1), q);
            assert_eq!(Quadrant::from_letters(q.letters()), Some(q));
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn formatted_reparses_to_same_reference(
            row in 0usize..13,
            col in 0usize..7,
            (width, q) in (0usize..=5).prop_flat_map(|w| {
                let q = if w < 5 {
                    prop::option::of(0usize..4).boxed()
                } else {
                    Just(None).boxed()
                };
                (Just(w), q)
            }),
            e in 0u32..100_000,
            n in 0u32..100_000,
        ) {
            let prefix = Prefix::at(col, row).unwrap().letters();
            let scale = 10u32.pow(5 - width as u32);
            let mut s = prefix.to_string();
            if width > 0 {
                s.push_str(&format!("{:0w$}{:0w$}", e / scale, n / scale, w = width));
            }
            if let Some(q) = q {
                s.push_str(Quadrant::ALL[q].letters());
            }
            let g = GridReference::parse(&s).unwrap();
            prop_assert_eq!(g.compact(), s.as_str());
            let again = GridReference::parse(&g.formatted()).unwrap();
            prop_assert_eq!(again, g);
        }
    }
}
