//! Car CRUD handlers: list, read, create, update, delete.

use crate::error::{AppError, Operation, OperationError, WithOperation};
use crate::model::{Car, CarChanges};
use crate::response::{success_created, success_many, success_one};
use crate::service::CarService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub const FOUND: &str = "found";
pub const CREATED: &str = "created successfully";
pub const UPDATED: &str = "updated successfully";
pub const DELETED: &str = "deleted successfully";

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidId(id_str.to_string()))
}

/// Unwrap the JSON extractor so rejections use the envelope shape. A body that overran the
/// size limit while streaming keeps its 413; everything else is a 400.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v).map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
        _ => AppError::BadRequest(e.body_text()),
    })
}

#[utoipa::path(
    get,
    path = "/carros",
    tag = "carros",
    responses((status = 200, description = "Every stored car under \"Lista de Carro\""))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, OperationError> {
    let cars = CarService::list(state.store.as_ref())
        .await
        .during(Operation::List)?;
    Ok(success_many(cars))
}

#[utoipa::path(
    get,
    path = "/carros/{id}",
    tag = "carros",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "The car, message \"found\""),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No car with this id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, OperationError> {
    let id = parse_id(&id_str).during(Operation::Read)?;
    let car = CarService::read(state.store.as_ref(), id)
        .await
        .during(Operation::Read)?;
    Ok(success_one(car, FOUND))
}

#[utoipa::path(
    post,
    path = "/carros",
    tag = "carros",
    request_body = Car,
    responses(
        (status = 201, description = "Created car echoed back"),
        (status = 400, description = "Missing field, wrong type or duplicate id")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, OperationError> {
    let body = json_body(body).during(Operation::Create)?;
    let car = CarService::create(state.store.as_ref(), body)
        .await
        .during(Operation::Create)?;
    Ok(success_created(car, CREATED))
}

#[utoipa::path(
    put,
    path = "/carros/{id}",
    tag = "carros",
    params(("id" = i64, Path, description = "Car id")),
    request_body = CarChanges,
    responses(
        (status = 200, description = "Updated car"),
        (status = 400, description = "Malformed body or id"),
        (status = 404, description = "No car with this id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, OperationError> {
    let id = parse_id(&id_str).during(Operation::Update)?;
    let body = json_body(body).during(Operation::Update)?;
    let car = CarService::update(state.store.as_ref(), id, body)
        .await
        .during(Operation::Update)?;
    Ok(success_one(car, UPDATED))
}

#[utoipa::path(
    delete,
    path = "/carros/{id}",
    tag = "carros",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "Deleted car echoed back"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No car with this id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, OperationError> {
    let id = parse_id(&id_str).during(Operation::Delete)?;
    let car = CarService::delete(state.store.as_ref(), id)
        .await
        .during(Operation::Delete)?;
    Ok(success_one(car, DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(matches!(parse_id("abc"), Err(AppError::InvalidId(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::InvalidId(_))));
    }
}
