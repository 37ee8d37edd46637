use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::repositories::store::{self, Entity, SqlFilterBuilder};
use crate::utils::errors::AppError;

impl Entity for Vehicle {
    const TABLE: &'static str = "vehicles";
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, id: i64, name: &str, owner_id: i64) -> Result<Vehicle, AppError> {
        sqlx::query_as::<_, Vehicle>(
            "INSERT INTO vehicles (id, name, owner_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store::map_write_error)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        store::get(&self.pool, id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        store::get_all(&self.pool).await
    }

    /// Filtrado por propietario y/o nombre, conjuntivo cuando ambos están
    /// presentes. El corto-circuito "ambos ausentes ⇒ vacío" es una guarda
    /// del handler, no de este método.
    pub async fn filter_by_owner_and_name(
        &self,
        owner_id: Option<i64>,
        name: Option<&str>,
    ) -> Result<Vec<Vehicle>, AppError> {
        let mut filter = SqlFilterBuilder::new();
        if owner_id.is_some() {
            filter.equals("owner_id");
        }
        if name.is_some() {
            filter.equals("name");
        }

        let sql = format!("SELECT * FROM vehicles{}", filter.where_clause());
        let mut query = sqlx::query_as::<_, Vehicle>(&sql);
        if let Some(owner_id) = owner_id {
            query = query.bind(owner_id);
        }
        if let Some(name) = name {
            query = query.bind(name);
        }

        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    pub async fn update(&self, id: i64, name: &str, owner_id: i64) -> Result<Vehicle, AppError> {
        sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET name = $2, owner_id = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store::map_write_error)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        store::delete::<Vehicle>(&self.pool, id).await
    }
}
