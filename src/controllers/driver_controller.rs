use sqlx::PgPool;
use validator::Validate;

use crate::models::driver::{CreateDriverRequest, Driver, UpdateDriverRequest};
use crate::repositories::DriverRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Driver, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Driver>, AppError> {
        let drivers = self.repository.filter_by_name(name).await?;
        if drivers.is_empty() {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }
        Ok(drivers)
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<Driver, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if self.repository.get(request.id).await?.is_some() {
            return Err(conflict_error("Driver", "id", &request.id.to_string()));
        }

        self.repository.create(request.id, &request.name).await
    }

    pub async fn update(&self, id: i64, request: UpdateDriverRequest) -> Result<Driver, AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))?;

        self.repository.update(id, &request.name).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))?;

        // Las asignaciones que lo referencian caen en cascada
        self.repository.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.get_all().await
    }
}
