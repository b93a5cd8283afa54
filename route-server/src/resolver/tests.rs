//! Unit and property tests for route resolution.

use super::*;
use crate::domain::{Borough, Coordinate};
use crate::topology::BranchDefinition;

fn line(s: &str) -> LineCode {
    LineCode::parse(s).unwrap()
}

fn station(id: &str, name: &str, lines: &[&str], lat: f64, lon: f64) -> StationRecord {
    StationRecord::new(
        id,
        name,
        lines.iter().map(|l| line(l)),
        Coordinate::new(lat, lon),
        Borough::Manhattan,
    )
}

fn ids(records: &[&StationRecord]) -> Vec<String> {
    records.iter().map(|s| s.id.as_str().to_owned()).collect()
}

#[test]
fn nearest_previous_station_wins() {
    let def = RouteDefinition::new(&["A", "B"]);
    let stations = vec![
        station("B2", "B", &["X"], 10.0, 10.0),
        station("A1", "A", &["X"], 0.0, 1.0),
        station("B1", "B", &["X"], 0.0, 0.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["A1", "B1"]);
    assert_eq!(ids(&resolved.unlisted), vec!["B2"]);
}

#[test]
fn distance_ties_break_by_collection_order() {
    let def = RouteDefinition::new(&["A", "B"]);
    let stations = vec![
        station("A1", "A", &["X"], 0.0, 0.0),
        station("B-east", "B", &["X"], 0.0, 1.0),
        station("B-west", "B", &["X"], 0.0, -1.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["A1", "B-east"]);
}

#[test]
fn ambiguous_first_station_takes_collection_order() {
    let def = RouteDefinition::new(&["A", "B"]);
    let stations = vec![
        station("A-far", "A", &["X"], 50.0, 50.0),
        station("A-near", "A", &["X"], 0.0, 0.0),
        station("B1", "B", &["X"], 0.0, 0.1),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["A-far", "B1"]);
    assert_eq!(ids(&resolved.unlisted), vec!["A-near"]);
}

#[test]
fn unmatched_names_are_omitted() {
    let def = RouteDefinition::new(&["A", "Ghost", "C"]);
    let stations = vec![
        station("A1", "A", &["X"], 0.0, 0.0),
        station("C1", "C", &["X"], 0.0, 2.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["A1", "C1"]);
    assert!(resolved.unlisted.is_empty());
}

#[test]
fn records_on_other_lines_are_ignored() {
    let def = RouteDefinition::new(&["A", "B"]);
    let stations = vec![
        station("A1", "A", &["X"], 0.0, 0.0),
        station("B-other", "B", &["Y"], 0.0, 0.0),
        station("B1", "B", &["X", "Y"], 5.0, 5.0),
        station("Z-other", "Z", &["Y"], 0.0, 0.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["A1", "B1"]);
    assert!(resolved.unlisted.is_empty());
}

#[test]
fn repeated_name_binds_distinct_records() {
    let def = RouteDefinition::new(&["Loop", "Mid", "Loop"]);
    let stations = vec![
        station("L1", "Loop", &["X"], 0.0, 0.0),
        station("M1", "Mid", &["X"], 0.0, 1.0),
        station("L2", "Loop", &["X"], 0.0, 2.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["L1", "M1", "L2"]);
}

#[test]
fn repeated_name_with_single_record_is_dropped() {
    let def = RouteDefinition::new(&["Loop", "Mid", "Loop"]);
    let stations = vec![
        station("L1", "Loop", &["X"], 0.0, 0.0),
        station("M1", "Mid", &["X"], 0.0, 1.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["L1", "M1"]);
}

#[test]
fn consumption_is_shared_between_main_and_branches() {
    let def = RouteDefinition::new(&["A", "P", "C"])
        .with_branch(BranchDefinition::bottom("Spur", "P", &["C", "D"]));
    let stations = vec![
        station("A1", "A", &["X"], 0.0, 0.0),
        station("P1", "P", &["X"], 0.0, 1.0),
        station("C-main", "C", &["X"], 0.0, 2.0),
        station("C-spur", "C", &["X"], 1.0, 2.0),
        station("D1", "D", &["X"], 2.0, 2.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["A1", "P1", "C-main"]);
    assert_eq!(resolved.branches.len(), 1);
    assert_eq!(ids(&resolved.branches[0]), vec!["C-spur", "D1"]);
}

#[test]
fn branch_overlap_with_one_record_starves_branch() {
    let def = RouteDefinition::new(&["A", "P", "C"])
        .with_branch(BranchDefinition::bottom("Spur", "P", &["C", "D"]));
    let stations = vec![
        station("A1", "A", &["X"], 0.0, 0.0),
        station("P1", "P", &["X"], 0.0, 1.0),
        station("C1", "C", &["X"], 0.0, 2.0),
        station("D1", "D", &["X"], 2.0, 2.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.main), vec!["A1", "P1", "C1"]);
    assert_eq!(ids(&resolved.branches[0]), vec!["D1"]);
}

#[test]
fn branch_disambiguation_uses_last_main_selection() {
    let def = RouteDefinition::new(&["A", "B"])
        .with_branch(BranchDefinition::bottom("Spur", "A", &["S"]));
    let stations = vec![
        station("A1", "A", &["X"], 0.0, 0.0),
        station("B1", "B", &["X"], 10.0, 0.0),
        station("S-near-A", "S", &["X"], 0.0, 0.5),
        station("S-near-B", "S", &["X"], 10.0, 0.5),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    // The walk continues from B, the last main-line selection.
    assert_eq!(ids(&resolved.branches[0]), vec!["S-near-B"]);
}

#[test]
fn unlisted_tail_is_alphabetical_and_last() {
    let def = RouteDefinition::new(&["Middle"]);
    let stations = vec![
        station("Z1", "Zeta", &["X"], 0.0, 0.0),
        station("M1", "Middle", &["X"], 0.0, 0.0),
        station("A1", "Alpha", &["X"], 0.0, 0.0),
        station("N1", "Nu", &["X"], 0.0, 0.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    let ordered: Vec<&str> = resolved.ordered().map(|s| s.id.as_str()).collect();
    assert_eq!(ordered, vec!["M1", "A1", "N1", "Z1"]);
}

#[test]
fn unlisted_ties_keep_collection_order() {
    let def = RouteDefinition::empty();
    let stations = vec![
        station("S2", "Same", &["X"], 0.0, 0.0),
        station("S1", "Same", &["X"], 0.0, 0.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(ids(&resolved.unlisted), vec!["S2", "S1"]);
}

#[test]
fn duplicate_ids_are_selected_once() {
    let def = RouteDefinition::new(&["A", "A"]);
    let stations = vec![
        station("dup", "A", &["X"], 0.0, 0.0),
        station("dup", "A", &["X"], 1.0, 1.0),
        station("dup", "Other", &["X"], 1.0, 1.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    assert_eq!(resolved.len(), 1);
    assert_eq!(ids(&resolved.main), vec!["dup"]);
}

#[test]
fn unknown_line_yields_only_fallback() {
    let stations = vec![
        station("Q2", "Quux", &["ZZ"], 0.0, 0.0),
        station("F1", "Foo", &["ZZ"], 0.0, 0.0),
        station("L1", "8 Av", &["L"], 0.0, 0.0),
    ];

    let resolved = resolve(&line("ZZ"), &stations);

    assert!(resolved.main.is_empty());
    assert!(resolved.branches.is_empty());
    assert_eq!(ids(&resolved.unlisted), vec!["F1", "Q2"]);
}

#[test]
fn unknown_line_with_no_members_is_empty() {
    let stations = vec![station("L1", "8 Av", &["L"], 0.0, 0.0)];

    let resolved = resolve(&line("ZZ"), &stations);

    assert!(resolved.is_empty());
}

#[test]
fn catalogued_line_round_trips() {
    let code = line("L");
    let def = topology::lookup(&code);
    // Reverse collection order so ordering must come from the topology.
    let stations: Vec<StationRecord> = def
        .main_line
        .iter()
        .enumerate()
        .rev()
        .map(|(i, name)| station(&format!("L{i}"), name, &["L"], 40.7, -74.0 + i as f64 * 0.01))
        .collect();

    let resolved = resolve(&code, &stations);

    let names: Vec<&str> = resolved.main.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, def.main_line.iter().map(String::as_str).collect::<Vec<_>>());
    assert!(resolved.unlisted.is_empty());
}

#[test]
fn ordered_concatenates_sections() {
    let def = RouteDefinition::new(&["A"])
        .with_branch(BranchDefinition::top("North", "A", &["N"]));
    let stations = vec![
        station("Z1", "Zed", &["X"], 0.0, 0.0),
        station("N1", "N", &["X"], 0.0, 0.0),
        station("A1", "A", &["X"], 0.0, 0.0),
    ];

    let resolved = resolve_with(&def, &line("X"), &stations);

    let ordered: Vec<&str> = resolved.ordered().map(|s| s.id.as_str()).collect();
    assert_eq!(ordered, vec!["A1", "N1", "Z1"]);
    assert_eq!(resolved.len(), 3);
}

/// Station snapshot shipped with the server.
const BUNDLED_STATIONS: &str = include_str!("../../../data/stations.json");

#[test]
fn bundled_dyre_branch_picks_nearest_platforms() {
    let index = crate::stations::StationIndex::from_json(BUNDLED_STATIONS).unwrap();
    let code = line("5");

    let resolved = resolve(&code, index.for_line(&code));

    assert_eq!(ids(&resolved.main), vec!["213", "214", "215"]);
    assert_eq!(ids(&resolved.branches[0]), vec!["501", "502", "503", "504", "505"]);
    // White Plains Rd platforms sharing the Dyre Av names fall to the tail.
    assert_eq!(ids(&resolved.unlisted), vec!["208", "211"]);
}

#[test]
fn bundled_canarsie_line_is_complete() {
    let index = crate::stations::StationIndex::from_json(BUNDLED_STATIONS).unwrap();
    let code = line("L");

    let resolved = resolve(&code, index.records());

    assert_eq!(resolved.main.len(), topology::lookup(&code).main_line.len());
    assert!(resolved.unlisted.is_empty());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const NAMES: &[&str] = &["A", "B", "C", "D", "E", "F"];

    /// Records drawn from a small name pool so that duplicates are common.
    fn stations_strategy() -> impl Strategy<Value = Vec<StationRecord>> {
        prop::collection::vec(
            (
                0..NAMES.len(),
                prop::bool::weighted(0.8),
                -5.0f64..5.0,
                -5.0f64..5.0,
            ),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, on_x, lat, lon))| {
                    let lines: &[&str] = if on_x { &["X"] } else { &["Y"] };
                    station(&format!("S{i}"), NAMES[name], lines, lat, lon)
                })
                .collect()
        })
    }

    fn definition_strategy() -> impl Strategy<Value = RouteDefinition> {
        let names = || prop::collection::vec(prop::sample::select(NAMES), 0..8);
        (names(), names(), any::<bool>()).prop_map(|(main, branch, top)| {
            let mut def = RouteDefinition::new(&main);
            if !branch.is_empty() {
                let point = main.first().copied().unwrap_or("A");
                def = def.with_branch(if top {
                    BranchDefinition::top("Spur", point, &branch)
                } else {
                    BranchDefinition::bottom("Spur", point, &branch)
                });
            }
            def
        })
    }

    proptest! {
        #[test]
        fn no_record_selected_twice(
            def in definition_strategy(),
            stations in stations_strategy(),
        ) {
            let resolved = resolve_with(&def, &line("X"), &stations);

            let mut seen = HashSet::new();
            for record in resolved.ordered() {
                prop_assert!(seen.insert(&record.id), "{} selected twice", record.id);
            }
        }

        #[test]
        fn every_line_member_appears(
            def in definition_strategy(),
            stations in stations_strategy(),
        ) {
            let resolved = resolve_with(&def, &line("X"), &stations);

            let members = stations.iter().filter(|s| s.serves(&line("X"))).count();
            prop_assert_eq!(resolved.len(), members);
            prop_assert!(resolved.ordered().all(|s| s.serves(&line("X"))));
        }

        #[test]
        fn unique_names_resolve_in_declared_order(
            order in Just(NAMES.to_vec()).prop_shuffle(),
            coords in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0), NAMES.len()),
        ) {
            let def = RouteDefinition::new(&order);
            let stations: Vec<StationRecord> = NAMES
                .iter()
                .zip(&coords)
                .enumerate()
                .map(|(i, (name, (lat, lon)))| station(&format!("S{i}"), name, &["X"], *lat, *lon))
                .collect();

            let resolved = resolve_with(&def, &line("X"), &stations);

            let names: Vec<&str> = resolved.main.iter().map(|s| s.name.as_str()).collect();
            prop_assert_eq!(names, order);
            prop_assert!(resolved.unlisted.is_empty());
        }

        #[test]
        fn resolution_is_deterministic(
            def in definition_strategy(),
            stations in stations_strategy(),
        ) {
            let first = resolve_with(&def, &line("X"), &stations);
            let second = resolve_with(&def, &line("X"), &stations);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn unlisted_tail_is_sorted(
            def in definition_strategy(),
            stations in stations_strategy(),
        ) {
            let resolved = resolve_with(&def, &line("X"), &stations);
            for pair in resolved.unlisted.windows(2) {
                prop_assert!(pair[0].name <= pair[1].name);
            }
        }
    }
}
