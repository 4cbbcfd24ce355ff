//! PostgreSQL backend. Table DDL and database bootstrap live here too.

use super::CarStore;
use crate::error::{AppError, ConfigError};
use crate::model::Car;
use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const CAR_TABLE: &str = "tb_carro";
const COLUMNS: &str = "id, brand, model, year, color, price, sales_count";

#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create `tb_carro` if it does not exist. No migrations beyond that.
    pub async fn ensure_table(&self) -> Result<(), AppError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGINT PRIMARY KEY,
                brand TEXT NOT NULL,
                model TEXT NOT NULL,
                year INTEGER NOT NULL,
                color TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                sales_count INTEGER NOT NULL
            )
            "#,
            CAR_TABLE
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn list(&self) -> Result<Vec<Car>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, CAR_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Car>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Car>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, CAR_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Car>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, car: &Car) -> Result<Car, AppError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            CAR_TABLE, COLUMNS, COLUMNS
        );
        tracing::debug!(sql = %sql, id = car.id, "query");
        sqlx::query_as::<_, Car>(&sql)
            .bind(car.id)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(car.year)
            .bind(&car.color)
            .bind(car.price)
            .bind(car.sales_count)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| insert_error(e, car.id))
    }

    async fn update(&self, car: &Car) -> Result<Option<Car>, AppError> {
        let sql = format!(
            "UPDATE {} SET brand = $2, model = $3, year = $4, color = $5, price = $6, sales_count = $7 WHERE id = $1 RETURNING {}",
            CAR_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id = car.id, "query");
        let row = sqlx::query_as::<_, Car>(&sql)
            .bind(car.id)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(car.year)
            .bind(&car.color)
            .bind(car.price)
            .bind(car.sales_count)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<Option<Car>, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING {}", CAR_TABLE, COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Car>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

fn insert_error(e: sqlx::Error, id: i64) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(format!("car {} already exists", id))
        }
        _ => AppError::Db(e),
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|_| invalid_url(database_url))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn invalid_url(url: &str) -> AppError {
    AppError::Config(ConfigError::Invalid {
        var: "DATABASE_URL",
        value: url.to_string(),
    })
}

/// Split a connection URL into (URL of the `postgres` admin database, target database name).
/// The path starts at the first `/` after the last `@`, so a `/` in the password is kept.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let rest = url.get(scheme_end..).unwrap_or("");
    let host_start = rest
        .split('?')
        .next()
        .and_then(|before_query| before_query.rfind('@'))
        .map(|i| scheme_end + i + 1)
        .unwrap_or(scheme_end);
    let path_start = url
        .get(host_start..)
        .and_then(|host| host.find('/'))
        .map(|i| host_start + i + 1)
        .ok_or_else(|| invalid_url(url))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_url_targets_postgres_database() {
        let (admin, db) = parse_db_name_from_url("postgres://root:pw@127.0.0.1:5432/db_carro").unwrap();
        assert_eq!(admin, "postgres://root:pw@127.0.0.1:5432/postgres");
        assert_eq!(db, "db_carro");
    }

    #[test]
    fn query_string_is_kept_on_admin_url() {
        let (admin, db) = parse_db_name_from_url("postgres://localhost/db_carro?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(db, "db_carro");
    }

    #[test]
    fn slash_in_password_does_not_split_the_url() {
        let (admin, db) = parse_db_name_from_url("postgres://root:p/w@db.local:5432/db_carro").unwrap();
        assert_eq!(admin, "postgres://root:p/w@db.local:5432/postgres");
        assert_eq!(db, "db_carro");
    }

    #[test]
    fn url_without_path_is_a_config_error() {
        match parse_db_name_from_url("postgres://localhost") {
            Err(AppError::Config(ConfigError::Invalid { var, value })) => {
                assert_eq!(var, "DATABASE_URL");
                assert_eq!(value, "postgres://localhost");
            }
            other => panic!("unexpected: {:?}", other),
        }
        let (_, db) = parse_db_name_from_url("postgres://localhost/").unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("db_carro"), "\"db_carro\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
