//! Store layout records
//!
//! `SpatialMap` is the resolved layout the navigation graph is built from.
//! `StoreMap` is the record shape the storage layer hands over; it resolves
//! into a `SpatialMap` with aisles and checkout lanes as obstacles and doors
//! as entrances.

mod aisle;

pub use aisle::{Aisle, CheckoutLane, Door, BAYS_PER_AISLE};

use serde::{Deserialize, Serialize};

use crate::errors::{RegionKind, ValidationError};
use crate::geometry::Region;


/// Resolved store layout
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialMap {
    pub width: i32,
    pub length: i32,
    #[serde(default)]
    pub obstacles: Vec<Region>,
    #[serde(default)]
    pub entrances: Vec<Region>,
}

impl SpatialMap {

    /// Empty floor of the given size
    pub fn new(width: i32, length: i32) -> Self {
        Self { width, length, obstacles: vec![], entrances: vec![] }
    }

    pub fn with_obstacle(mut self, region: Region) -> Self {
        self.obstacles.push(region);
        self
    }

    pub fn with_entrance(mut self, region: Region) -> Self {
        self.entrances.push(region);
        self
    }

    /// Check dimensions and that every region is well formed and on the map
    /// Reports the first offending region, obstacles before entrances
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.width <= 0 || self.length <= 0 {
            return Err(ValidationError::InvalidDimensions {
                width: self.width,
                length: self.length,
            });
        }

        let regions = self.obstacles.iter().enumerate()
            .map(|(i, r)| (RegionKind::Obstacle, i, r))
            .chain(self.entrances.iter().enumerate().map(|(i, r)| (RegionKind::Entrance, i, r)));

        for (kind, index, region) in regions {
            if !region.is_well_formed() {
                return Err(ValidationError::InvertedRegion { kind, index, region: *region });
            }
            if !region.fits_within(self.width, self.length) {
                return Err(ValidationError::RegionOutOfBounds {
                    kind,
                    index,
                    region: *region,
                    width: self.width,
                    length: self.length,
                });
            }
        }
        Ok(())
    }
}


/// Store map record as persisted by the storage layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMap {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub width: i32,
    pub length: i32,
    #[serde(rename = "aisle", default)]
    pub aisles: Vec<Aisle>,
    #[serde(rename = "checkout", default)]
    pub checkout_lanes: Vec<CheckoutLane>,
    #[serde(rename = "entrance", default)]
    pub doors: Vec<Door>,
}

impl StoreMap {

    pub fn new(title: impl Into<String>, width: i32, length: i32) -> Self {
        Self {
            title: title.into(),
            description: None,
            width,
            length,
            aisles: vec![],
            checkout_lanes: vec![],
            doors: vec![],
        }
    }

    /// Resolve to the layout the graph builder consumes
    /// Aisles come before checkout lanes in the obstacle list
    pub fn spatial_map(&self) -> SpatialMap {
        SpatialMap {
            width: self.width,
            length: self.length,
            obstacles: self.aisles.iter().map(|a| a.extent)
                .chain(self.checkout_lanes.iter().map(|c| c.extent))
                .collect(),
            entrances: self.doors.iter().map(|d| d.extent).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.spatial_map().validate()
    }

    /// Aisle by its number
    pub fn aisle(&self, number: i32) -> Option<&Aisle> {
        self.aisles.iter().find(|a| a.number == number)
    }
}
