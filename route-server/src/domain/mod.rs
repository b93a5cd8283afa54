//! Domain types for the route server.
//!
//! Station records are owned by the persistence layer and are treated as
//! immutable input here. Identifier and code types validate at construction
//! time, so code that receives them can trust their validity.

mod borough;
mod line;
mod station;

pub use borough::Borough;
pub use line::{InvalidLineCode, LineCode};
pub use station::{ComplexId, Coordinate, StationId, StationRecord};
