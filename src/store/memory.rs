//! In-process backend. Rows live in a `BTreeMap` keyed by id, so listing is ordered by id.

use super::CarStore;
use crate::error::AppError;
use crate::model::Car;
use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryCarStore {
    rows: RwLock<BTreeMap<i64, Car>>,
}

impl MemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn list(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Car>, AppError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, car: &Car) -> Result<Car, AppError> {
        match self.rows.write().await.entry(car.id) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!("car {} already exists", car.id))),
            Entry::Vacant(slot) => Ok(slot.insert(car.clone()).clone()),
        }
    }

    async fn update(&self, car: &Car) -> Result<Option<Car>, AppError> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&car.id).map(|row| {
            *row = car.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Car>, AppError> {
        Ok(self.rows.write().await.remove(&id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
