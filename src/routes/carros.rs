//! Carros CRUD routes.

use crate::handlers::car::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn carros_routes(state: AppState) -> Router {
    Router::new()
        .route("/carros", get(list).post(create))
        .route("/carros/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
