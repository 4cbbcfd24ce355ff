//! carros-api: JSON CRUD service for the Carros resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod keys;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreBackend};
pub use error::{AppError, ConfigError, Operation, OperationError};
pub use model::{Car, CarChanges};
pub use response::{success_created, success_many, success_one, Envelope};
pub use routes::{app, carros_routes, common_routes};
pub use service::CarService;
pub use state::AppState;
pub use store::{ensure_database_exists, CarStore, MemoryCarStore, PgCarStore};
