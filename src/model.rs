//! The `Car` entity and the partial-update body.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of `tb_carro`. The id is chosen by the client on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    pub sales_count: i32,
}

/// Fields a PUT may change. Absent and `null` fields leave the stored value alone; `id` is never updatable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct CarChanges {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub sales_count: Option<i32>,
}

impl CarChanges {
    pub fn is_empty(&self) -> bool {
        *self == CarChanges::default()
    }

    pub fn apply_to(self, car: &mut Car) {
        if let Some(brand) = self.brand {
            car.brand = brand;
        }
        if let Some(model) = self.model {
            car.model = model;
        }
        if let Some(year) = self.year {
            car.year = year;
        }
        if let Some(color) = self.color {
            car.color = color;
        }
        if let Some(price) = self.price {
            car.price = price;
        }
        if let Some(sales_count) = self.sales_count {
            car.sales_count = sales_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Car {
        Car {
            id: 1,
            brand: "Toyota".into(),
            model: "Corolla".into(),
            year: 2020,
            color: "black".into(),
            price: 95000.0,
            sales_count: 10,
        }
    }

    #[test]
    fn price_only_change_leaves_other_fields() {
        let mut car = corolla();
        let changes: CarChanges = serde_json::from_str(r#"{"price": 89000.0}"#).unwrap();
        changes.apply_to(&mut car);
        assert_eq!(car, Car { price: 89000.0, ..corolla() });
    }

    #[test]
    fn null_and_unknown_fields_are_ignored() {
        let changes: CarChanges =
            serde_json::from_str(r#"{"id": 99, "color": null, "sunroof": true}"#).unwrap();
        assert!(changes.is_empty());
        let mut car = corolla();
        changes.apply_to(&mut car);
        assert_eq!(car, corolla());
    }
}
