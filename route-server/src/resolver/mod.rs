//! Route resolution: binding route-definition names to station records.
//!
//! A route definition names stations, but several physical records can
//! share a name (one per platform group at a transfer complex). The resolver
//! walks the declared names in travel order and, whenever a name is
//! ambiguous, picks the candidate nearest the previously selected station.
//! Every record is selected at most once per resolution.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{LineCode, StationId, StationRecord};
use crate::topology::{self, RouteDefinition};

/// Output of one resolution pass.
///
/// `branches` is parallel to the definition's `branches`: entry `i` holds the
/// records bound to branch `i`'s station names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedRoute<'a> {
    pub main: Vec<&'a StationRecord>,
    pub branches: Vec<Vec<&'a StationRecord>>,
    /// Records serving the line that no declared name claimed, sorted by name.
    pub unlisted: Vec<&'a StationRecord>,
}

impl<'a> ResolvedRoute<'a> {
    /// The full ordered resolution: main line, then each branch, then the
    /// unlisted tail.
    pub fn ordered(&self) -> impl Iterator<Item = &'a StationRecord> + '_ {
        self.main
            .iter()
            .chain(self.branches.iter().flatten())
            .chain(self.unlisted.iter())
            .copied()
    }

    /// Number of records in the resolution.
    pub fn len(&self) -> usize {
        self.main.len() + self.branches.iter().map(Vec::len).sum::<usize>() + self.unlisted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a line against the process-wide route catalog.
///
/// Unknown line codes resolve with an empty definition, so only the
/// alphabetical unlisted tail (normally empty) is produced.
pub fn resolve<'a, I>(line: &LineCode, stations: I) -> ResolvedRoute<'a>
where
    I: IntoIterator<Item = &'a StationRecord>,
{
    resolve_with(topology::lookup(line), line, stations)
}

/// Resolve a line against an explicit route definition.
///
/// Records that do not serve `line` are ignored. Names with no available
/// record are omitted without error.
pub fn resolve_with<'a, I>(
    definition: &RouteDefinition,
    line: &LineCode,
    stations: I,
) -> ResolvedRoute<'a>
where
    I: IntoIterator<Item = &'a StationRecord>,
{
    let mut walk = Walk::new(line, stations);

    let main = walk.bind_all(&definition.main_line);
    let branches = definition
        .branches
        .iter()
        .map(|branch| walk.bind_all(&branch.stations))
        .collect();
    let unlisted = walk.into_unlisted();

    if !unlisted.is_empty() {
        debug!(
            line = %line,
            count = unlisted.len(),
            "stations missing from route topology appended to route"
        );
    }

    ResolvedRoute {
        main,
        branches,
        unlisted,
    }
}

/// State for a single resolution pass.
struct Walk<'a> {
    /// Records serving the line, in collection order.
    on_line: Vec<&'a StationRecord>,
    /// Name to candidate records, each list in collection order.
    by_name: HashMap<&'a str, Vec<&'a StationRecord>>,
    /// Ids already selected in this pass.
    consumed: HashSet<&'a StationId>,
    /// Most recently selected record, across main line and branches.
    previous: Option<&'a StationRecord>,
}

impl<'a> Walk<'a> {
    fn new<I>(line: &LineCode, stations: I) -> Self
    where
        I: IntoIterator<Item = &'a StationRecord>,
    {
        let on_line: Vec<&'a StationRecord> =
            stations.into_iter().filter(|s| s.serves(line)).collect();

        let mut by_name: HashMap<&'a str, Vec<&'a StationRecord>> = HashMap::new();
        for &station in &on_line {
            by_name.entry(station.name.as_str()).or_default().push(station);
        }

        Self {
            on_line,
            by_name,
            consumed: HashSet::new(),
            previous: None,
        }
    }

    fn bind_all(&mut self, names: &[String]) -> Vec<&'a StationRecord> {
        names.iter().filter_map(|name| self.bind(name)).collect()
    }

    /// Select a record for `name`, or `None` if every candidate is used up.
    fn bind(&mut self, name: &str) -> Option<&'a StationRecord> {
        let available: Vec<&'a StationRecord> = self
            .by_name
            .get(name)
            .into_iter()
            .flatten()
            .copied()
            .filter(|s| !self.consumed.contains(&s.id))
            .collect();

        let selected = match (available.as_slice(), self.previous) {
            ([], _) => {
                debug!(station = name, "no available record for route station");
                return None;
            }
            ([only], _) => *only,
            ([first, ..], None) => *first,
            (candidates, Some(previous)) => {
                let nearest = nearest_to(previous, candidates);
                debug!(
                    station = name,
                    candidates = candidates.len(),
                    previous = %previous.id,
                    selected = %nearest.id,
                    "disambiguated station by proximity"
                );
                nearest
            }
        };

        trace!(station = name, id = %selected.id, "bound route station");
        self.consumed.insert(&selected.id);
        self.previous = Some(selected);
        Some(selected)
    }

    /// Remaining unconsumed records, sorted by name.
    fn into_unlisted(mut self) -> Vec<&'a StationRecord> {
        let mut rest: Vec<&'a StationRecord> = Vec::new();
        for station in self.on_line {
            // Inserting also drops any later record reusing the same id.
            if self.consumed.insert(&station.id) {
                rest.push(station);
            }
        }
        // Stable sort: equal names keep collection order.
        rest.sort_by(|a, b| a.name.cmp(&b.name));
        rest
    }
}

/// The candidate with the smallest squared planar distance to `previous`.
/// Ties go to the earliest candidate.
fn nearest_to<'a>(previous: &StationRecord, candidates: &[&'a StationRecord]) -> &'a StationRecord {
    let mut best = candidates[0];
    let mut best_distance = best.coordinate.squared_distance(&previous.coordinate);
    for &candidate in &candidates[1..] {
        let distance = candidate.coordinate.squared_distance(&previous.coordinate);
        if distance.total_cmp(&best_distance).is_lt() {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests;
