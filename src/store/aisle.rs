use serde::{Deserialize, Serialize};

use crate::geometry::{Coordinate, Region};


/// Number of bays an aisle is split into
pub const BAYS_PER_AISLE: usize = 3;


/// Shelving aisle - solid for navigation
/// Serialized records carry the computed `bays`; on decode they are ignored
/// and recomputed from the extent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "AisleRecord")]
pub struct Aisle {
    pub number: i32,
    pub name: String,
    #[serde(flatten)]
    pub extent: Region,
}

impl Aisle {

    pub fn new(number: i32, name: impl Into<String>, extent: Region) -> Self {
        Self { number, name: name.into(), extent }
    }

    /// True when bays run along x (the aisle is wider than it is long)
    fn is_horizontal(&self) -> bool {
        self.extent.width() > self.extent.length()
    }

    /// Inclusive [start, end] spans of each bay along the aisle's long axis
    /// The first two bays get len / 3 cells, the third runs to the aisle end
    /// Aisles shorter than three cells have one bay covering the whole aisle
    pub fn bays(&self) -> Vec<(i32, i32)> {
        let (start, end) = if self.is_horizontal() {
            (self.extent.x_start, self.extent.x_end)
        } else {
            (self.extent.y_start, self.extent.y_end)
        };
        let len = end as i64 - start as i64 + 1;
        let bay_len = len / BAYS_PER_AISLE as i64;
        if bay_len == 0 {
            return vec![(start, end)];
        }

        // every bay lies inside [start, end], so narrowing back to i32 is lossless
        let mut bays = Vec::with_capacity(BAYS_PER_AISLE);
        for i in 0..BAYS_PER_AISLE as i64 {
            let bay_start = start as i64 + i * bay_len;
            let bay_end = if i == BAYS_PER_AISLE as i64 - 1 {
                end as i64
            } else {
                bay_start + bay_len - 1
            };
            bays.push((bay_start as i32, bay_end as i32));
        }
        bays
    }

    /// Index of the bay holding `c`, None if the cell is outside the aisle
    pub fn bay_of(&self, c: &Coordinate) -> Option<usize> {
        if !self.extent.contains(c) {
            return None;
        }
        let along = if self.is_horizontal() { c.x } else { c.y };
        self.bays().iter().position(|&(s, e)| along >= s && along <= e)
    }
}


/// Persisted shape of an aisle
#[derive(Serialize)]
struct AisleRecord {
    number: i32,
    name: String,
    bays: Vec<(i32, i32)>,
    #[serde(flatten)]
    extent: Region,
}

impl From<Aisle> for AisleRecord {
    fn from(aisle: Aisle) -> Self {
        let bays = aisle.bays();
        Self { number: aisle.number, name: aisle.name, bays, extent: aisle.extent }
    }
}


/// Checkout lane - solid for navigation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLane {
    pub lane: i32,
    #[serde(flatten)]
    pub extent: Region,
}

impl CheckoutLane {
    pub fn new(lane: i32, extent: Region) -> Self {
        Self { lane, extent }
    }
}


/// Store door - always passable, even where it overlaps an aisle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub name: String,
    #[serde(flatten)]
    pub extent: Region,
}

impl Door {
    pub fn new(name: impl Into<String>, extent: Region) -> Self {
        Self { name: name.into(), extent }
    }
}
