//! Branch-aware section builder.
//!
//! Turns a resolved main line and its resolved branches into display
//! sections. The route's branch layout is classified once into a
//! [`BranchKind`] and a single builder lays out the segments for it.

use tracing::debug;

use super::{PositionTag, ResolvedRouteEntry, RouteSection, SectionKind};
use crate::domain::StationRecord;
use crate::topology::{BranchDefinition, BranchPosition, RouteDefinition};

/// Branch layout of a route, as far as the diagram is concerned.
///
/// Only one branch drives the layout. With several branches (not present
/// in current data) a bottom branch is preferred over a top one, and the
/// first declared of each wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind<'d> {
    None,
    Top {
        index: usize,
        branch: &'d BranchDefinition,
    },
    Bottom {
        index: usize,
        branch: &'d BranchDefinition,
    },
}

impl<'d> BranchKind<'d> {
    /// Classify a route definition.
    pub fn classify(definition: &'d RouteDefinition) -> Self {
        let first_at = |position: BranchPosition| {
            definition
                .branches
                .iter()
                .enumerate()
                .find(|(_, b)| b.position == position)
        };

        if let Some((index, branch)) = first_at(BranchPosition::Bottom) {
            BranchKind::Bottom { index, branch }
        } else if let Some((index, branch)) = first_at(BranchPosition::Top) {
            BranchKind::Top { index, branch }
        } else {
            BranchKind::None
        }
    }

    /// Index of the layout-driving branch in the definition.
    pub fn index(&self) -> Option<usize> {
        match self {
            BranchKind::None => None,
            BranchKind::Top { index, .. } | BranchKind::Bottom { index, .. } => Some(*index),
        }
    }
}

/// Build display sections for a resolved route.
///
/// `branches` is parallel to `definition.branches`; a missing entry is
/// treated as a branch with no resolved stations. Output order:
///
/// - no branch: the main line;
/// - bottom branch: trunk up to the branch point, the main line's
///   continuation, then the branch;
/// - top branch: the branch, then the main line merging at its first entry.
///
/// Any further branches follow as their own labelled sections.
pub fn build<'a>(
    main: &[&'a StationRecord],
    branches: &[Vec<&'a StationRecord>],
    definition: &RouteDefinition,
) -> Vec<RouteSection<'a>> {
    let kind = BranchKind::classify(definition);
    let mut segments = Vec::new();

    match kind {
        BranchKind::None => segments.push(Segment::new(main, SectionKind::Trunk)),
        BranchKind::Bottom { index, branch } => {
            match main.iter().position(|s| s.name == branch.branch_point) {
                Some(point) => {
                    let (trunk, continuation) = main.split_at(point + 1);
                    segments.push(Segment::new(trunk, SectionKind::Trunk).with_branch_point(point));
                    segments.push(Segment::new(continuation, SectionKind::Continuation));
                }
                None => {
                    debug!(
                        branch = %branch.name,
                        branch_point = %branch.branch_point,
                        "branch point not on resolved main line; drawing whole main line as trunk"
                    );
                    segments.push(Segment::new(main, SectionKind::Trunk));
                }
            }
            segments.push(Segment::branch(branch_slice(branches, index), &branch.name));
        }
        BranchKind::Top { index, branch } => {
            segments.push(Segment::branch(branch_slice(branches, index), &branch.name));
            segments.push(Segment::new(main, SectionKind::Trunk).with_branch_point(0));
        }
    }

    for (index, extra) in definition.branches.iter().enumerate() {
        if kind.index() != Some(index) {
            segments.push(Segment::branch(branch_slice(branches, index), &extra.name));
        }
    }

    segments
        .into_iter()
        .flat_map(Segment::into_sections)
        .collect()
}

/// Sections for the stations the topology does not mention.
pub(super) fn unlisted_sections<'a>(unlisted: &[&'a StationRecord]) -> Vec<RouteSection<'a>> {
    Segment::new(unlisted, SectionKind::Unlisted).into_sections()
}

fn branch_slice<'s, 'a>(
    branches: &'s [Vec<&'a StationRecord>],
    index: usize,
) -> &'s [&'a StationRecord] {
    branches.get(index).map(Vec::as_slice).unwrap_or(&[])
}

/// A logically contiguous run of stations, tagged as one unit and then
/// split into borough sections.
struct Segment<'s, 'a> {
    stations: &'s [&'a StationRecord],
    kind: SectionKind,
    label: Option<&'s str>,
    branch_point: Option<usize>,
}

impl<'s, 'a> Segment<'s, 'a> {
    fn new(stations: &'s [&'a StationRecord], kind: SectionKind) -> Self {
        Self {
            stations,
            kind,
            label: None,
            branch_point: None,
        }
    }

    fn branch(stations: &'s [&'a StationRecord], label: &'s str) -> Self {
        Self {
            label: Some(label),
            ..Self::new(stations, SectionKind::Branch)
        }
    }

    fn with_branch_point(mut self, index: usize) -> Self {
        self.branch_point = Some(index);
        self
    }

    fn into_sections(self) -> Vec<RouteSection<'a>> {
        let len = self.stations.len();
        let is_branch = self.kind == SectionKind::Branch;
        let mut sections: Vec<RouteSection<'a>> = Vec::new();

        for (index, &station) in self.stations.iter().enumerate() {
            let entry = ResolvedRouteEntry {
                station,
                position: PositionTag::for_index(index, len, self.branch_point == Some(index)),
                borough: station.borough,
                is_branch,
                branch_label: self.label.filter(|_| is_branch).map(str::to_owned),
                alongside_trunk: self.kind == SectionKind::Continuation,
            };

            match sections.last_mut() {
                Some(section) if section.borough == station.borough => section.entries.push(entry),
                _ => {
                    let label = if sections.is_empty() {
                        self.label.map(str::to_owned)
                    } else {
                        None
                    };
                    sections.push(RouteSection {
                        kind: self.kind,
                        borough: station.borough,
                        label,
                        entries: vec![entry],
                    });
                }
            }
        }

        sections
    }
}
