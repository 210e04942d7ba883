use std::fmt;

use thiserror::Error;

use crate::geometry::{Coordinate, Region};


/// Which list of the map a region came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Obstacle,
    Entrance,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKind::Obstacle => write!(f, "obstacle"),
            RegionKind::Entrance => write!(f, "entrance"),
        }
    }
}


/// Map rejected while building the navigation graph
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid map dimensions {width}x{length}: must have an area of at least 1 unit")]
    InvalidDimensions { width: i32, length: i32 },

    #[error("{kind} region #{index} {region} has a start greater than its end")]
    InvertedRegion { kind: RegionKind, index: usize, region: Region },

    #[error("{kind} region #{index} {region} exceeds map dimensions {width}x{length}")]
    RegionOutOfBounds {
        kind: RegionKind,
        index: usize,
        region: Region,
        width: i32,
        length: i32,
    },
}


/// Why a search endpoint was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfRange, // not on the grid
    Blocked, // on a cell covered by an obstacle
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::OutOfRange => write!(f, "out of range"),
            InvalidReason::Blocked => write!(f, "blocked"),
        }
    }
}


/// Search rejected before it started
/// An unreachable destination is not an error, see `PathResult::Unreachable`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathPlannerError {
    #[error("invalid coordinate {coordinate}: {reason}")]
    InvalidCoordinate { coordinate: Coordinate, reason: InvalidReason },
}


/// Any failure of the build-then-search entry point
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Planner(#[from] PathPlannerError),
}

pub type Result<T> = std::result::Result<T, NavError>;
