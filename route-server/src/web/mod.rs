//! Web layer for the route server.
//!
//! Provides JSON endpoints exposing catalogued lines and their route
//! diagrams.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router, route_for};
pub use state::AppState;
