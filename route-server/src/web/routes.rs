//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, warn};

use crate::diagram::RouteDiagram;
use crate::domain::LineCode;
use crate::resolver::resolve;
use crate::stations::StationIndex;
use crate::topology;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines", get(list_lines))
        .route("/lines/:code/route", get(line_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every catalogued line.
async fn list_lines() -> Json<LinesResponse> {
    let catalog = topology::catalog();
    let lines = catalog
        .line_codes()
        .into_iter()
        .map(|code| LineSummary::new(code, catalog.lookup(code)))
        .collect();

    Json(LinesResponse { lines })
}

/// Route diagram for one line.
///
/// Lines missing from the catalog are not an error; their diagram holds
/// whatever stations claim membership of the line.
async fn line_route(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<RouteResponse>, AppError> {
    let line = LineCode::parse_normalized(&code).map_err(|e| AppError::BadRequest {
        message: format!("{e}: {code:?}"),
    })?;

    Ok(Json(route_for(&state.stations, line)))
}

/// Resolve and lay out the route for `line` from a station snapshot.
///
/// Recomputed on every call; visited flags in the snapshot are reflected
/// as-is.
pub fn route_for(stations: &StationIndex, line: LineCode) -> RouteResponse {
    let definition = topology::lookup(&line);
    let resolved = resolve(&line, stations.for_line(&line));
    debug!(
        line = %line,
        main = resolved.main.len(),
        unlisted = resolved.unlisted.len(),
        "resolved route"
    );

    let diagram = RouteDiagram::build(line, &resolved, definition);
    RouteResponse::from(&diagram)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
