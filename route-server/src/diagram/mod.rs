//! Route diagram model.
//!
//! A diagram is the resolved route cut into display sections. Each section
//! is a run of consecutive stations in one borough that belong to the same
//! logical segment (trunk, continuation past a branch point, branch, or the
//! unlisted tail). Every entry carries a [`PositionTag`] telling the
//! renderer which connector graphic to draw.

mod builder;

use serde::Serialize;

use crate::domain::{Borough, ComplexId, LineCode, StationId, StationRecord};
use crate::resolver::ResolvedRoute;
use crate::topology::RouteDefinition;

pub use builder::{BranchKind, build};

/// Where an entry sits within its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionTag {
    First,
    Middle,
    Last,
    /// Where a branch leaves or joins the main line.
    BranchPoint,
    /// Sole entry of its segment.
    Single,
}

impl PositionTag {
    /// Tag for the entry at `index` in a segment of `len` entries.
    ///
    /// A declared branch point overrides the positional tag.
    pub fn for_index(index: usize, len: usize, is_branch_point: bool) -> Self {
        if is_branch_point {
            PositionTag::BranchPoint
        } else if len == 1 {
            PositionTag::Single
        } else if index == 0 {
            PositionTag::First
        } else if index + 1 == len {
            PositionTag::Last
        } else {
            PositionTag::Middle
        }
    }
}

/// Which logical segment of the route a section belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Main line, up to and including a bottom branch's branch point.
    Trunk,
    /// Main line past a bottom branch point, drawn beside the branch.
    Continuation,
    /// Stations of a declared branch.
    Branch,
    /// Stations serving the line that the topology does not mention.
    Unlisted,
}

/// What a detail view should open when an entry is selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Selection {
    Station(StationId),
    Complex(ComplexId),
}

/// One station in a route diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRouteEntry<'a> {
    pub station: &'a StationRecord,
    pub position: PositionTag,
    /// Borough of the section this entry belongs to.
    pub borough: Borough,
    pub is_branch: bool,
    pub branch_label: Option<String>,
    /// Drawn next to a trunk line that continues past a branch point.
    pub alongside_trunk: bool,
}

impl ResolvedRouteEntry<'_> {
    /// The owning complex if there is one, otherwise the station itself.
    pub fn selection(&self) -> Selection {
        match &self.station.complex {
            Some(complex) => Selection::Complex(complex.clone()),
            None => Selection::Station(self.station.id.clone()),
        }
    }
}

/// A run of same-borough entries from one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSection<'a> {
    pub kind: SectionKind,
    pub borough: Borough,
    /// Set on the first section of a branch.
    pub label: Option<String>,
    pub entries: Vec<ResolvedRouteEntry<'a>>,
}

/// Visited counts over a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub visited: usize,
    pub total: usize,
}

impl Progress {
    /// Visited share in `0.0..=1.0`; an empty route counts as 0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.visited as f64 / self.total as f64
        }
    }
}

/// The complete sectioned route for one line.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDiagram<'a> {
    pub line: LineCode,
    pub sections: Vec<RouteSection<'a>>,
}

impl<'a> RouteDiagram<'a> {
    /// Build the diagram for a resolved route, including the unlisted tail.
    pub fn build(line: LineCode, route: &ResolvedRoute<'a>, definition: &RouteDefinition) -> Self {
        let mut sections = build(&route.main, &route.branches, definition);
        sections.extend(builder::unlisted_sections(&route.unlisted));
        Self { line, sections }
    }

    /// All entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &ResolvedRouteEntry<'a>> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Number of entries across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.entries.is_empty())
    }

    /// How many of the line's stations are marked visited.
    pub fn progress(&self) -> Progress {
        self.entries().fold(Progress::default(), |mut acc, entry| {
            acc.total += 1;
            if entry.station.visited {
                acc.visited += 1;
            }
            acc
        })
    }
}
