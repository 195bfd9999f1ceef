//! The fixed table of supported grid resolutions.
//!
//! Eleven levels exist, from 100km down to 1m. Standard levels are powers of
//! ten; the intermediate "quadrant" levels halve the standard level above
//! them and are distinguished in a reference by an NE/SE/SW/NW suffix.
//!
//! Moving one level finer alternates between halving (standard → quadrant)
//! and dividing by five (quadrant → next standard).

use crate::error::{BngError, Result};
use std::fmt;

/// One of the eleven supported grid resolutions.
///
/// # Examples
///
/// ```
/// use bngrid_core::Resolution;
///
/// assert_eq!(Resolution::Km5.metres(), 5000);
/// assert_eq!(Resolution::Km5.label(), "5km");
/// assert!(Resolution::Km5.is_quadrant());
/// assert_eq!(Resolution::Km5.finer(), Some(Resolution::Km1));
/// assert_eq!(Resolution::Km5.coarser(), Some(Resolution::Km10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resolution {
    /// 100km squares, identified by the two-letter prefix alone.
    Km100,
    /// 50km quadrants of a 100km square.
    Km50,
    /// 10km squares.
    Km10,
    /// 5km quadrants of a 10km square.
    Km5,
    /// 1km squares.
    Km1,
    /// 500m quadrants of a 1km square.
    M500,
    /// 100m squares.
    M100,
    /// 50m quadrants of a 100m square.
    M50,
    /// 10m squares.
    M10,
    /// 5m quadrants of a 10m square.
    M5,
    /// 1m squares.
    M1,
}

impl Resolution {
    /// Every resolution, coarsest first.
    pub const ALL: [Resolution; 11] = [
        Resolution::Km100,
        Resolution::Km50,
        Resolution::Km10,
        Resolution::Km5,
        Resolution::Km1,
        Resolution::M500,
        Resolution::M100,
        Resolution::M50,
        Resolution::M10,
        Resolution::M5,
        Resolution::M1,
    ];

    /// Cell edge length in metres.
    pub const fn metres(self) -> u32 {
        match self {
            Self::Km100 => 100_000,
            Self::Km50 => 50_000,
            Self::Km10 => 10_000,
            Self::Km5 => 5_000,
            Self::Km1 => 1_000,
            Self::M500 => 500,
            Self::M100 => 100,
            Self::M50 => 50,
            Self::M10 => 10,
            Self::M5 => 5,
            Self::M1 => 1,
        }
    }

    /// Canonical label, e.g. `"100km"` or `"5m"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Km100 => "100km",
            Self::Km50 => "50km",
            Self::Km10 => "10km",
            Self::Km5 => "5km",
            Self::Km1 => "1km",
            Self::M500 => "500m",
            Self::M100 => "100m",
            Self::M50 => "50m",
            Self::M10 => "10m",
            Self::M5 => "5m",
            Self::M1 => "1m",
        }
    }

    /// `true` for the intermediate levels reached by halving a standard level.
    pub const fn is_quadrant(self) -> bool {
        matches!(
            self,
            Self::Km50 | Self::Km5 | Self::M500 | Self::M50 | Self::M5
        )
    }

    /// Width of one digit bin in metres.
    ///
    /// A quadrant level shares its digit bins with the standard level above
    /// it, so its bins are twice its own edge length.
    pub const fn bin_metres(self) -> u32 {
        if self.is_quadrant() {
            self.metres() * 2
        } else {
            self.metres()
        }
    }

    /// Number of digits per axis in a reference at this resolution.
    pub const fn digits_per_axis(self) -> usize {
        match self.bin_metres() {
            100_000 => 0,
            10_000 => 1,
            1_000 => 2,
            100 => 3,
            10 => 4,
            _ => 5,
        }
    }

    /// Position in [`Resolution::ALL`] (0 = 100km).
    pub const fn level(self) -> usize {
        self as usize
    }

    /// The next finer level, or `None` at 1m.
    pub fn finer(self) -> Option<Resolution> {
        Self::ALL.get(self.level() + 1).copied()
    }

    /// The next coarser level, or `None` at 100km.
    pub fn coarser(self) -> Option<Resolution> {
        self.level().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// `true` if cells at `self` are strictly smaller than cells at `other`.
    pub fn is_finer_than(self, other: Resolution) -> bool {
        self.metres() < other.metres()
    }

    /// Look up a resolution by its metre value.
    pub fn from_metres(metres: u32) -> Option<Resolution> {
        Self::ALL.iter().copied().find(|r| r.metres() == metres)
    }

    /// Look up a resolution by its exact label.
    pub fn from_label(label: &str) -> Option<Resolution> {
        Self::ALL.iter().copied().find(|r| r.label() == label)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolution as supplied by a caller: either a metre value or a label.
///
/// Resolved once, at the API boundary, to a [`Resolution`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionSpec {
    /// Metre value such as `1000`.
    Metres(u32),
    /// Label such as `"1km"`.
    Label(String),
}

impl ResolutionSpec {
    /// Normalise to a supported [`Resolution`].
    ///
    /// Returns `Err(BngError::UnsupportedResolution)` when the token matches
    /// neither a metre value nor a label.
    pub fn resolve(&self) -> Result<Resolution> {
        let found = match self {
            Self::Metres(m) => Resolution::from_metres(*m),
            Self::Label(l) => Resolution::from_label(l),
        };
        found.ok_or_else(|| BngError::UnsupportedResolution {
            token: self.to_string(),
        })
    }
}

impl fmt::Display for ResolutionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metres(m) => write!(f, "{m}"),
            Self::Label(l) => f.write_str(l),
        }
    }
}

impl From<u32> for ResolutionSpec {
    fn from(v: u32) -> Self {
        Self::Metres(v)
    }
}

impl From<&str> for ResolutionSpec {
    fn from(v: &str) -> Self {
        Self::Label(v.to_owned())
    }
}

impl From<String> for ResolutionSpec {
    fn from(v: String) -> Self {
        Self::Label(v)
    }
}

impl From<Resolution> for ResolutionSpec {
    fn from(v: Resolution) -> Self {
        Self::Metres(v.metres())
    }
}

/// Normalise any resolution token to a [`Resolution`].
///
/// # Examples
///
/// ```
/// use bngrid_core::{resolve, Resolution};
///
/// assert_eq!(resolve(1000).unwrap(), Resolution::Km1);
/// assert_eq!(resolve("1km").unwrap(), Resolution::Km1);
/// assert!(resolve(2000).is_err());
/// ```
pub fn resolve(spec: impl Into<ResolutionSpec>) -> Result<Resolution> {
    spec.into().resolve()
}

#[cfg(feature = "serde")]
impl serde::Serialize for Resolution {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_u32(self.metres())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Resolution {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let metres = u32::deserialize(d)?;
        Resolution::from_metres(metres).ok_or_else(|| {
            serde::de::Error::custom(BngError::UnsupportedResolution {
                token: metres.to_string(),
            })
        })
    }
}
