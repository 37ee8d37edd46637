use sqlx::PgPool;
use validator::Validate;

use crate::models::fleet::{CreateFleetRequest, Fleet, UpdateFleetRequest};
use crate::repositories::FleetRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct FleetController {
    repository: FleetRepository,
}

impl FleetController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FleetRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Fleet, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Fleet", id))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Fleet, AppError> {
        self.repository
            .get_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("Fleet not found".to_string()))
    }

    pub async fn create(&self, request: CreateFleetRequest) -> Result<Fleet, AppError> {
        request.validate().map_err(AppError::Validation)?;

        // El orden de los checks es contractual: identidad antes que nombre
        if self.repository.get(request.id).await?.is_some() {
            return Err(conflict_error("Fleet", "id", &request.id.to_string()));
        }
        if self.repository.get_by_name(&request.name).await?.is_some() {
            return Err(conflict_error("Fleet", "name", &request.name));
        }

        self.repository.create(request.id, &request.name).await
    }

    pub async fn update(&self, id: i64, request: UpdateFleetRequest) -> Result<Fleet, AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Fleet", id))?;

        // El nombre nuevo no puede estar en uso por una flota *distinta*
        if let Some(existing) = self.repository.get_by_name(&request.name).await? {
            if existing.id != id {
                return Err(conflict_error("Fleet", "name", &request.name));
            }
        }

        self.repository.update(id, &request.name).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Fleet", id))?;

        // La cascada sobre vehículos y asignaciones la aplica el esquema
        self.repository.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Fleet>, AppError> {
        self.repository.get_all().await
    }
}
