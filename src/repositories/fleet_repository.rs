use sqlx::PgPool;

use crate::models::fleet::Fleet;
use crate::repositories::store::{self, Entity};
use crate::utils::errors::AppError;

impl Entity for Fleet {
    const TABLE: &'static str = "fleets";
}

pub struct FleetRepository {
    pool: PgPool,
}

impl FleetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, id: i64, name: &str) -> Result<Fleet, AppError> {
        sqlx::query_as::<_, Fleet>(
            "INSERT INTO fleets (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(store::map_write_error)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Fleet>, AppError> {
        store::get(&self.pool, id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Fleet>, AppError> {
        store::get_all(&self.pool).await
    }

    /// Lookup exacto por nombre; usado por los pre-checks de unicidad.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Fleet>, AppError> {
        sqlx::query_as::<_, Fleet>("SELECT * FROM fleets WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Resolución nombre → ids. Capacidad experimental del camino de
    /// resolución cruzada por nombre; hoy sólo la ejercitan los tests.
    pub async fn get_id_by_name(&self, name: &str) -> Result<Vec<i64>, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM fleets WHERE name = $1")
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn update(&self, id: i64, name: &str) -> Result<Fleet, AppError> {
        sqlx::query_as::<_, Fleet>(
            "UPDATE fleets SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(store::map_write_error)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        store::delete::<Fleet>(&self.pool, id).await
    }
}
