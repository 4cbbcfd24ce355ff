//! Persistence binding for `tb_carro`: the `CarStore` trait and its backends.

mod memory;
mod postgres;

pub use memory::MemoryCarStore;
pub use postgres::{ensure_database_exists, PgCarStore};

use crate::error::AppError;
use crate::model::Car;
use async_trait::async_trait;

/// Row-level primitives over the car table. Lookups return `None` for an absent id;
/// deciding what that means is left to the caller.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// All rows, ordered by id.
    async fn list(&self) -> Result<Vec<Car>, AppError>;

    async fn find(&self, id: i64) -> Result<Option<Car>, AppError>;

    /// Insert a new row. An existing row with the same id is an `AppError::Conflict`.
    async fn insert(&self, car: &Car) -> Result<Car, AppError>;

    /// Overwrite every mutable column of the row with `car.id`. Returns `None` if the row is gone.
    async fn update(&self, car: &Car) -> Result<Option<Car>, AppError>;

    /// Remove a row and return it as it was.
    async fn delete(&self, id: i64) -> Result<Option<Car>, AppError>;

    /// Cheap round trip used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;

    fn backend(&self) -> &'static str;
}
