use std::fmt;

use num_traits::{Num, Signed};
use serde::{Deserialize, Serialize};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid cell position
/// x runs along the map width, y along its length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four axis neighbors, in a fixed order: left, right, down, up
    /// No range check, the graph decides which of them exist
    pub fn neighbors_4(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.x - 1, self.y),
            Coordinate::new(self.x + 1, self.y),
            Coordinate::new(self.x, self.y - 1),
            Coordinate::new(self.x, self.y + 1),
        ]
    }

    /// Steps between two cells on a 4-connected grid with no obstacles
    pub fn manhattan(&self, other: &Coordinate) -> u32 {
        manhattan_distance(self.x as i64, self.y as i64, other.x as i64, other.y as i64) as u32
    }

    /// True if the cells differ by exactly one unit along exactly one axis
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}


/// Axis-aligned rectangle with inclusive bounds
/// Field names follow the stored map records (xStartVal, ...)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "xStartVal", alias = "xStart")]
    pub x_start: i32,
    #[serde(rename = "xEndVal", alias = "xEnd")]
    pub x_end: i32,
    #[serde(rename = "yStartVal", alias = "yStart")]
    pub y_start: i32,
    #[serde(rename = "yEndVal", alias = "yEnd")]
    pub y_end: i32,
}

impl Region {

    /// Create a region from inclusive bounds
    /// Bounds are not checked here; the graph builder validates them against the map
    pub const fn new(x_start: i32, x_end: i32, y_start: i32, y_end: i32) -> Self {
        Self { x_start, x_end, y_start, y_end }
    }

    /// Region covering a single cell
    pub const fn cell(c: Coordinate) -> Self {
        Self::new(c.x, c.x, c.y, c.y)
    }

    /// start <= end on both axes
    pub fn is_well_formed(&self) -> bool {
        self.x_start <= self.x_end && self.y_start <= self.y_end
    }

    /// Region lies inside [0, width) x [0, length)
    pub fn fits_within(&self, width: i32, length: i32) -> bool {
        self.x_start >= 0 && self.y_start >= 0 && self.x_end < width && self.y_end < length
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        c.x >= self.x_start && c.x <= self.x_end && c.y >= self.y_start && c.y <= self.y_end
    }

    /// Number of cells along x
    pub fn width(&self) -> i64 {
        self.x_end as i64 - self.x_start as i64 + 1
    }

    /// Number of cells along y
    pub fn length(&self) -> i64 {
        self.y_end as i64 - self.y_start as i64 + 1
    }

    pub fn area(&self) -> i64 {
        if !self.is_well_formed() {
            return 0;
        }
        self.width() * self.length()
    }

    /// Every covered cell, row by row (y outer, x inner)
    /// Empty for a region with start > end
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (self.y_start..=self.y_end)
            .flat_map(move |y| (self.x_start..=self.x_end).map(move |x| Coordinate::new(x, y)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[x {}..={}, y {}..={}]", self.x_start, self.x_end, self.y_start, self.y_end)
    }
}
