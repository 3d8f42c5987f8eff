//! Celestial Mirror — HTTP API.
//!
//! Thin axum front end over the reading engine: stateless wizard
//! transitions, one reading cycle per request, and the report projection.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

/// Builds the full application router for `state`.
#[must_use]
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/intake", routes::intake::router())
        .nest("/api/v1/readings", routes::readings::router())
        .with_state(state)
}
