use sqlx::PgPool;

use crate::models::driver::Driver;
use crate::repositories::store::{self, Entity};
use crate::utils::errors::AppError;

impl Entity for Driver {
    const TABLE: &'static str = "drivers";
}

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, id: i64, name: &str) -> Result<Driver, AppError> {
        sqlx::query_as::<_, Driver>(
            "INSERT INTO drivers (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(store::map_write_error)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Driver>, AppError> {
        store::get(&self.pool, id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Driver>, AppError> {
        store::get_all(&self.pool).await
    }

    pub async fn filter_by_name(&self, name: &str) -> Result<Vec<Driver>, AppError> {
        store::filter_by_name(&self.pool, name).await
    }

    /// Resolución nombre → ids. Capacidad experimental del camino de
    /// resolución cruzada por nombre; hoy sólo la ejercitan los tests.
    pub async fn get_id_by_name(&self, name: &str) -> Result<Vec<i64>, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM drivers WHERE name = $1")
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn update(&self, id: i64, name: &str) -> Result<Driver, AppError> {
        sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(store::map_write_error)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        store::delete::<Driver>(&self.pool, id).await
    }
}
