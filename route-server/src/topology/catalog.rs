//! Hand-maintained subway route tables.
//!
//! Names must match the `name` field of station records exactly. Stations
//! missing here still surface at the end of a resolved route, so drift
//! between these tables and the station data is survivable.

use super::{BranchDefinition, RouteCatalog, RouteCatalogBuilder, RouteDefinition};

/// Build the subway route catalog.
pub fn subway_routes() -> RouteCatalog {
    RouteCatalogBuilder::new()
        .line("1", broadway_seventh_avenue_local())
        .line("5", lexington_avenue_express())
        .line("7", flushing_local())
        .line("A", eighth_avenue_express())
        .line("G", crosstown_local())
        .line("L", canarsie_local())
        .build()
}

fn broadway_seventh_avenue_local() -> RouteDefinition {
    RouteDefinition::new(&[
        "Van Cortlandt Park-242 St",
        "238 St",
        "231 St",
        "Marble Hill-225 St",
        "215 St",
        "207 St",
        "Dyckman St",
        "191 St",
        "181 St",
        "168 St-Washington Hts",
        "157 St",
        "145 St",
        "137 St-City College",
        "125 St",
        "116 St-Columbia University",
        "Cathedral Pkwy (110 St)",
        "103 St",
        "96 St",
        "86 St",
        "79 St",
        "72 St",
        "66 St-Lincoln Center",
        "59 St-Columbus Circle",
        "50 St",
        "Times Sq-42 St",
        "34 St-Penn Station",
        "28 St",
        "23 St",
        "18 St",
        "14 St",
        "Christopher St-Stonewall",
        "Houston St",
        "Canal St",
        "Franklin St",
        "Chambers St",
        "WTC Cortlandt",
        "Rector St",
        "South Ferry",
    ])
}

fn lexington_avenue_express() -> RouteDefinition {
    RouteDefinition::new(&[
        "E 180 St",
        "West Farms Sq-E Tremont Av",
        "174 St",
        "Freeman St",
        "Simpson St",
        "Intervale Av",
        "Prospect Av",
        "Jackson Av",
        "3 Av-149 St",
        "149 St-Grand Concourse",
        "138 St-Grand Concourse",
        "125 St",
        "86 St",
        "59 St",
        "Grand Central-42 St",
        "14 St-Union Sq",
        "Brooklyn Bridge-City Hall",
        "Fulton St",
        "Wall St",
        "Bowling Green",
        "Borough Hall",
        "Nevins St",
        "Atlantic Av-Barclays Ctr",
        "Franklin Av-Medgar Evers College",
        "President St-Medgar Evers College",
        "Sterling St",
        "Winthrop St",
        "Church Av",
        "Beverly Rd",
        "Newkirk Av-Little Haiti",
        "Flatbush Av-Brooklyn College",
    ])
    .with_branch(BranchDefinition::top(
        "Dyre Av",
        "E 180 St",
        &[
            "Eastchester-Dyre Av",
            "Baychester Av",
            "Gun Hill Rd",
            "Pelham Pkwy",
            "Morris Park",
        ],
    ))
}

fn flushing_local() -> RouteDefinition {
    RouteDefinition::new(&[
        "34 St-Hudson Yards",
        "Times Sq-42 St",
        "5 Av",
        "Grand Central-42 St",
        "Vernon Blvd-Jackson Av",
        "Hunters Point Av",
        "Court Sq",
        "Queensboro Plaza",
        "33 St-Rawson St",
        "40 St-Lowery St",
        "46 St-Bliss St",
        "52 St",
        "Woodside-61 St",
        "69 St",
        "74 St-Broadway",
        "82 St-Jackson Hts",
        "90 St-Elmhurst Av",
        "Junction Blvd",
        "103 St-Corona Plaza",
        "111 St",
        "Mets-Willets Point",
        "Flushing-Main St",
    ])
}

fn eighth_avenue_express() -> RouteDefinition {
    RouteDefinition::new(&[
        "Inwood-207 St",
        "Dyckman St",
        "190 St",
        "181 St",
        "175 St",
        "168 St",
        "145 St",
        "125 St",
        "59 St-Columbus Circle",
        "42 St-Port Authority Bus Terminal",
        "34 St-Penn Station",
        "14 St",
        "W 4 St-Wash Sq",
        "Canal St",
        "Chambers St",
        "Fulton St",
        "High St",
        "Jay St-MetroTech",
        "Hoyt-Schermerhorn Sts",
        "Nostrand Av",
        "Utica Av",
        "Broadway Junction",
        "Euclid Av",
        "Grant Av",
        "80 St",
        "88 St",
        "Rockaway Blvd",
        "Aqueduct Racetrack",
        "Aqueduct-N Conduit Av",
        "Howard Beach-JFK Airport",
        "Broad Channel",
        "Beach 67 St",
        "Beach 60 St",
        "Beach 44 St",
        "Beach 36 St",
        "Beach 25 St",
        "Far Rockaway-Mott Av",
    ])
    .with_branch(BranchDefinition::bottom(
        "Lefferts Blvd",
        "Rockaway Blvd",
        &["104 St", "111 St", "Ozone Park-Lefferts Blvd"],
    ))
}

fn crosstown_local() -> RouteDefinition {
    RouteDefinition::new(&[
        "Court Sq",
        "21 St",
        "Greenpoint Av",
        "Nassau Av",
        "Metropolitan Av",
        "Broadway",
        "Flushing Av",
        "Myrtle-Willoughby Avs",
        "Bedford-Nostrand Avs",
        "Classon Av",
        "Clinton-Washington Avs",
        "Fulton St",
        "Hoyt-Schermerhorn Sts",
        "Bergen St",
        "Carroll St",
        "Smith-9 Sts",
        "4 Av-9 St",
        "7 Av",
        "15 St-Prospect Park",
        "Fort Hamilton Pkwy",
        "Church Av",
    ])
}

fn canarsie_local() -> RouteDefinition {
    RouteDefinition::new(&[
        "8 Av",
        "6 Av",
        "Union Sq-14 St",
        "3 Av",
        "1 Av",
        "Bedford Av",
        "Lorimer St",
        "Graham Av",
        "Grand St",
        "Montrose Av",
        "Morgan Av",
        "Jefferson St",
        "DeKalb Av",
        "Myrtle-Wyckoff Avs",
        "Halsey St",
        "Wilson Av",
        "Bushwick Av-Aberdeen St",
        "Broadway Junction",
        "Atlantic Av",
        "Sutter Av",
        "Livonia Av",
        "New Lots Av",
        "East 105 St",
        "Canarsie-Rockaway Pkwy",
    ])
}
