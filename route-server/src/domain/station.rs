//! Station record types.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Borough, LineCode};

/// Unique identifier of a physical station record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a station complex: several records that form one
/// interchange (multiple platforms or entrances under one name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplexId(String);

impl ComplexId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComplexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Squared planar distance in degrees², `(Δlat)² + (Δlon)²`.
    ///
    /// Deliberately not geodesic: platform disambiguation at known transfer
    /// complexes has been validated against this metric.
    pub fn squared_distance(&self, other: &Coordinate) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        dlat * dlat + dlon * dlon
    }
}

/// A single physical station record as supplied by the persistence layer.
///
/// Names are not unique: a transfer complex usually has one record per
/// platform group, all sharing the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub lines: BTreeSet<LineCode>,
    pub coordinate: Coordinate,
    pub borough: Borough,
    #[serde(default)]
    pub complex: Option<ComplexId>,
    #[serde(default)]
    pub visited: bool,
    #[serde(default)]
    pub visited_on: Option<NaiveDate>,
}

impl StationRecord {
    /// Create an unvisited record with no complex.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lines: impl IntoIterator<Item = LineCode>,
        coordinate: Coordinate,
        borough: Borough,
    ) -> Self {
        Self {
            id: StationId::new(id),
            name: name.into(),
            lines: lines.into_iter().collect(),
            coordinate,
            borough,
            complex: None,
            visited: false,
            visited_on: None,
        }
    }

    /// Whether this record claims membership of `line`.
    pub fn serves(&self, line: &LineCode) -> bool {
        self.lines.contains(line)
    }
}
