//! CRUD execution against a `CarStore`. Absent rows become `AppError::NotFound` here.

use crate::error::AppError;
use crate::model::Car;
use crate::service::RequestValidator;
use crate::store::CarStore;
use serde_json::Value;

pub struct CarService;

impl CarService {
    pub async fn list(store: &dyn CarStore) -> Result<Vec<Car>, AppError> {
        store.list().await
    }

    /// Fetch one row by id.
    pub async fn read(store: &dyn CarStore, id: i64) -> Result<Car, AppError> {
        store
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Check and insert a create body. Returns the stored row.
    pub async fn create(store: &dyn CarStore, body: Value) -> Result<Car, AppError> {
        let car = RequestValidator::new_car(body)?;
        let created = store.insert(&car).await?;
        tracing::info!(id = created.id, backend = store.backend(), "car created");
        Ok(created)
    }

    /// Apply the fields present in `body` to row `id` and save it.
    /// The read and the write are separate round trips; a concurrent delete in between yields NotFound.
    pub async fn update(store: &dyn CarStore, id: i64, body: Value) -> Result<Car, AppError> {
        let changes = RequestValidator::car_changes(body)?;
        let mut car = Self::read(store, id).await?;
        if changes.is_empty() {
            tracing::debug!(id, "update with no changes");
            return Ok(car);
        }
        changes.apply_to(&mut car);
        let updated = store
            .update(&car)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tracing::info!(id, backend = store.backend(), "car updated");
        Ok(updated)
    }

    /// Delete row `id`. Returns the row as it was before removal.
    pub async fn delete(store: &dyn CarStore, id: i64) -> Result<Car, AppError> {
        let deleted = store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tracing::info!(id, backend = store.backend(), "car deleted");
        Ok(deleted)
    }
}
