//! Station snapshot store.
//!
//! Stands in for the persistence layer: loads station records from a JSON
//! file once at startup and serves read-only views of them.

mod error;
mod index;

pub use error::StationError;
pub use index::StationIndex;
