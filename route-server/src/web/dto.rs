//! Data transfer objects for web responses.

use chrono::NaiveDate;
use serde::Serialize;

use crate::diagram::{
    PositionTag, Progress, ResolvedRouteEntry, RouteDiagram, RouteSection, SectionKind, Selection,
};
use crate::domain::{Borough, ComplexId, LineCode, StationId};
use crate::topology::RouteDefinition;

/// A catalogued line.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// Line code (e.g., "A")
    pub code: String,

    /// Number of stations declared on the main line
    pub main_line_stations: usize,

    /// Branch names, in declaration order
    pub branches: Vec<String>,
}

impl LineSummary {
    pub fn new(code: &LineCode, definition: &RouteDefinition) -> Self {
        Self {
            code: code.to_string(),
            main_line_stations: definition.main_line.len(),
            branches: definition.branches.iter().map(|b| b.name.clone()).collect(),
        }
    }
}

/// Response listing every catalogued line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineSummary>,
}

/// Route diagram for one line.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Line code
    pub line: String,

    /// Visited counts across the whole route
    pub progress: ProgressResult,

    /// Display sections in order
    pub sections: Vec<SectionResult>,
}

impl From<&RouteDiagram<'_>> for RouteResponse {
    fn from(diagram: &RouteDiagram<'_>) -> Self {
        Self {
            line: diagram.line.to_string(),
            progress: ProgressResult::from(diagram.progress()),
            sections: diagram.sections.iter().map(SectionResult::from).collect(),
        }
    }
}

/// Visited counts with the share precomputed for progress bars.
#[derive(Debug, Serialize)]
pub struct ProgressResult {
    pub visited: usize,
    pub total: usize,
    pub fraction: f64,
}

impl From<Progress> for ProgressResult {
    fn from(progress: Progress) -> Self {
        Self {
            visited: progress.visited,
            total: progress.total,
            fraction: progress.fraction(),
        }
    }
}

/// A same-borough run of stations.
#[derive(Debug, Serialize)]
pub struct SectionResult {
    pub kind: SectionKind,
    pub borough: Borough,

    /// Branch name, on the first section of a branch
    pub label: Option<String>,

    pub entries: Vec<EntryResult>,
}

impl From<&RouteSection<'_>> for SectionResult {
    fn from(section: &RouteSection<'_>) -> Self {
        Self {
            kind: section.kind,
            borough: section.borough,
            label: section.label.clone(),
            entries: section.entries.iter().map(EntryResult::from).collect(),
        }
    }
}

/// A station in a route diagram.
#[derive(Debug, Serialize)]
pub struct EntryResult {
    pub id: StationId,
    pub name: String,
    pub borough: Borough,

    /// Connector shape for the renderer
    pub position: PositionTag,

    pub is_branch: bool,
    pub branch_label: Option<String>,
    pub alongside_trunk: bool,

    pub visited: bool,
    pub visited_on: Option<NaiveDate>,
    pub complex: Option<ComplexId>,

    /// What to open when the entry is selected
    pub selection: Selection,
}

impl From<&ResolvedRouteEntry<'_>> for EntryResult {
    fn from(entry: &ResolvedRouteEntry<'_>) -> Self {
        let station = entry.station;
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
            borough: entry.borough,
            position: entry.position,
            is_branch: entry.is_branch,
            branch_label: entry.branch_label.clone(),
            alongside_trunk: entry.alongside_trunk,
            visited: station.visited,
            visited_on: station.visited_on,
            complex: station.complex.clone(),
            selection: entry.selection(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
