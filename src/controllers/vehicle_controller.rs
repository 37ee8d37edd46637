use sqlx::PgPool;
use validator::Validate;

use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleFilters};
use crate::repositories::{FleetRepository, VehicleRepository};
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
    fleets: FleetRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            fleets: FleetRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Vehicle, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    /// Filtrado por propietario y/o nombre. Sin filtros devuelve vacío sin
    /// consultar (guarda del handler); con filtros y sin resultados, 404.
    pub async fn filter(&self, filters: VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        if filters.is_empty() {
            return Ok(Vec::new());
        }

        let vehicles = self
            .repository
            .filter_by_owner_and_name(filters.owner_id, filters.name.as_deref())
            .await?;
        if vehicles.is_empty() {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(vehicles)
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate().map_err(AppError::Validation)?;

        // El padre se resuelve siempre antes del check de identidad
        self.fleets
            .get(request.owner_id)
            .await?
            .ok_or_else(|| not_found_error("Fleet", request.owner_id))?;

        if self.repository.get(request.id).await?.is_some() {
            return Err(conflict_error("Vehicle", "id", &request.id.to_string()));
        }

        self.repository
            .create(request.id, &request.name, request.owner_id)
            .await
    }

    pub async fn update(&self, id: i64, request: UpdateVehicleRequest) -> Result<Vehicle, AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        self.repository
            .update(id, &request.name, request.owner_id)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        self.repository.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.get_all().await
    }
}
