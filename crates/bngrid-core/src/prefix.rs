//! The 100km square letter table.
//!
//! The grid is 7 squares wide and 13 squares tall. Row 0 is the southern
//! edge; column 0 is the western edge. Letter pairs absent from this table
//! are not valid prefixes, even though they are well-formed letters.

/// Number of 100km columns (eastings 0..700000).
pub const COLUMNS: usize = 7;

/// Number of 100km rows (northings 0..1300000).
pub const ROWS: usize = 13;

/// Prefix letters indexed by `[row][column]`, south to north, west to east.
pub(crate) static PREFIXES: [[&str; COLUMNS]; ROWS] = [
    ["SV", "SW", "SX", "SY", "SZ", "TV", "TW"],
    ["SQ", "SR", "SS", "ST", "SU", "TQ", "TR"],
    ["SL", "SM", "SN", "SO", "SP", "TL", "TM"],
    ["SF", "SG", "SH", "SJ", "SK", "TF", "TG"],
    ["SA", "SB", "SC", "SD", "SE", "TA", "TB"],
    ["NV", "NW", "NX", "NY", "NZ", "OV", "OW"],
    ["NQ", "NR", "NS", "NT", "NU", "OQ", "OR"],
    ["NL", "NM", "NN", "NO", "NP", "OL", "OM"],
    ["NF", "NG", "NH", "NJ", "NK", "OF", "OG"],
    ["NA", "NB", "NC", "ND", "NE", "OA", "OB"],
    ["HV", "HW", "HX", "HY", "HZ", "JV", "JW"],
    ["HQ", "HR", "HS", "HT", "HU", "JQ", "JR"],
    ["HL", "HM", "HN", "HO", "HP", "JL", "JM"],
];

/// Location of a 100km square in the letter table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prefix {
    column: u8,
    row: u8,
}

impl Prefix {
    /// Find the square for a two-letter code, or `None` if the code is not
    /// one of the 91 valid prefixes.
    pub fn from_letters(letters: &str) -> Option<Prefix> {
        PREFIXES.iter().enumerate().find_map(|(row, cols)| {
            cols.iter().position(|&p| p == letters).map(|column| Prefix {
                column: column as u8,
                row: row as u8,
            })
        })
    }

    /// The square at the given table position, if it exists.
    pub fn at(column: usize, row: usize) -> Option<Prefix> {
        if column < COLUMNS && row < ROWS {
            Some(Prefix {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// The two-letter code.
    pub fn letters(self) -> &'static str {
        PREFIXES[self.row as usize][self.column as usize]
    }

    /// Column index (0 = westernmost).
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Row index (0 = southernmost).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Easting of the square's western edge in metres.
    pub fn easting_origin(self) -> u32 {
        self.column as u32 * 100_000
    }

    /// Northing of the square's southern edge in metres.
    pub fn northing_origin(self) -> u32 {
        self.row as u32 * 100_000
    }
}
