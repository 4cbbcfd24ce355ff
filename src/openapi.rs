//! OpenAPI description of the carros routes, served at `/openapi.json`.

use crate::model::{Car, CarChanges};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "carros-api"),
    paths(
        crate::handlers::car::list,
        crate::handlers::car::read,
        crate::handlers::car::create,
        crate::handlers::car::update,
        crate::handlers::car::delete
    ),
    components(schemas(Car, CarChanges)),
    tags((name = "carros", description = "Car CRUD"))
)]
pub struct ApiDoc;
