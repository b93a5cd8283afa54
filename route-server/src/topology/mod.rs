//! Static per-line route topology.
//!
//! Each line is described by its main line (station names in travel order)
//! plus optional branches that diverge from or merge into it at a named
//! branch point. Definitions reference stations by name only; binding names
//! to physical records is the resolver's job.
//!
//! The catalog is built once on first use and never mutated afterwards.

mod catalog;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::domain::LineCode;

pub use catalog::subway_routes;

/// Where a branch attaches relative to the main line in a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchPosition {
    /// Branch runs into the main line; drawn above it, merging at the
    /// main line's first station.
    Top,
    /// Branch leaves the main line at the branch point; drawn below it.
    Bottom,
}

/// A secondary station sequence attached to a main line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDefinition {
    pub name: String,
    pub stations: Vec<String>,
    pub position: BranchPosition,
    /// Name expected to occur in the main line.
    pub branch_point: String,
}

impl BranchDefinition {
    /// Create a branch that merges into the main line from above.
    pub fn top(name: &str, branch_point: &str, stations: &[&str]) -> Self {
        Self::new(name, branch_point, stations, BranchPosition::Top)
    }

    /// Create a branch that diverges from the main line below it.
    pub fn bottom(name: &str, branch_point: &str, stations: &[&str]) -> Self {
        Self::new(name, branch_point, stations, BranchPosition::Bottom)
    }

    fn new(name: &str, branch_point: &str, stations: &[&str], position: BranchPosition) -> Self {
        Self {
            name: name.to_owned(),
            stations: stations.iter().map(|s| (*s).to_owned()).collect(),
            position,
            branch_point: branch_point.to_owned(),
        }
    }
}

/// Route definition for one line: main line plus branches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteDefinition {
    pub main_line: Vec<String>,
    pub branches: Vec<BranchDefinition>,
}

/// Returned for every line code the catalog does not know.
static EMPTY_ROUTE: RouteDefinition = RouteDefinition::empty();

impl RouteDefinition {
    /// A definition with no stations and no branches.
    pub const fn empty() -> Self {
        Self {
            main_line: Vec::new(),
            branches: Vec::new(),
        }
    }

    /// Create a definition with the given main line and no branches.
    pub fn new(main_line: &[&str]) -> Self {
        Self {
            main_line: main_line.iter().map(|s| (*s).to_owned()).collect(),
            branches: Vec::new(),
        }
    }

    /// Attach a branch.
    pub fn with_branch(mut self, branch: BranchDefinition) -> Self {
        self.branches.push(branch);
        self
    }

    /// Returns true if the definition names no stations at all.
    pub fn is_empty(&self) -> bool {
        self.main_line.is_empty() && self.branches.iter().all(|b| b.stations.is_empty())
    }

    /// Every declared name in walk order: the main line, then each branch.
    pub fn walk_order(&self) -> impl Iterator<Item = &str> {
        self.main_line
            .iter()
            .chain(self.branches.iter().flat_map(|b| b.stations.iter()))
            .map(String::as_str)
    }
}

/// Lookup table from line code to route definition.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: HashMap<LineCode, RouteDefinition>,
}

impl RouteCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the definition for a line.
    pub fn insert(&mut self, line: LineCode, definition: RouteDefinition) {
        self.routes.insert(line, definition);
    }

    /// Look up the definition for a line.
    ///
    /// Never fails: unknown codes get an empty definition.
    pub fn lookup(&self, line: &LineCode) -> &RouteDefinition {
        self.routes.get(line).unwrap_or(&EMPTY_ROUTE)
    }

    /// Returns true if the catalog has a definition for `line`.
    pub fn contains(&self, line: &LineCode) -> bool {
        self.routes.contains_key(line)
    }

    /// All catalogued line codes, sorted.
    pub fn line_codes(&self) -> Vec<&LineCode> {
        let mut codes: Vec<&LineCode> = self.routes.keys().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for creating a route catalog.
///
/// Provides a fluent API for adding lines.
#[derive(Debug, Default)]
pub struct RouteCatalogBuilder {
    inner: RouteCatalog,
}

impl RouteCatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line. Invalid line codes are skipped.
    pub fn line(mut self, code: &str, definition: RouteDefinition) -> Self {
        if let Ok(line) = LineCode::parse(code) {
            self.inner.insert(line, definition);
        }
        self
    }

    /// Build the catalog.
    pub fn build(self) -> RouteCatalog {
        self.inner
    }
}

static CATALOG: LazyLock<RouteCatalog> = LazyLock::new(subway_routes);

/// The process-wide subway route catalog.
pub fn catalog() -> &'static RouteCatalog {
    &CATALOG
}

/// Look up a line in the process-wide catalog.
pub fn lookup(line: &LineCode) -> &'static RouteDefinition {
    CATALOG.lookup(line)
}
