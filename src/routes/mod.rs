//! Router assembly: carros routes, operational routes and the middleware stack.

mod carros;
mod common;

pub use carros::carros_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router. Bodies over `max_body_bytes` are rejected with 413 before reaching a handler.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(carros_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
}
