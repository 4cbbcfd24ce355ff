//! CarService: fetch-mutate-save logic over a `CarStore`, plus request body checks.

mod crud;
mod validation;
pub use crud::CarService;
pub use validation::{RequestValidator, REQUIRED_FIELDS};
