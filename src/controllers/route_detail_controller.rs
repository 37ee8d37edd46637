//! Controller de asignaciones
//!
//! Aplica el protocolo de pre-checks sobre las tres entidades padre antes
//! de escribir; la base de datos queda como última defensa ante carreras.

use sqlx::PgPool;
use validator::Validate;

use crate::models::route_detail::{
    CreateRouteDetailRequest, DeleteRouteDetailQuery, RouteDetail, RouteDetailNameFilters,
};
use crate::repositories::{
    DriverRepository, RouteDetailRepository, RouteRepository, VehicleRepository,
};
use crate::utils::errors::{not_found_error, AppError};

pub struct RouteDetailController {
    repository: RouteDetailRepository,
    routes: RouteRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
}

impl RouteDetailController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteDetailRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    /// Consulta central filtrada por nombres. Sin ningún filtro devuelve
    /// vacío sin consultar; con filtros, la lista puede ser vacía (200).
    pub async fn get_by_name(
        &self,
        filters: RouteDetailNameFilters,
    ) -> Result<Vec<RouteDetail>, AppError> {
        if filters.is_empty() {
            return Ok(Vec::new());
        }

        self.repository.get_by_name(&filters).await
    }

    /// Asignaciones de una ruta. Una lista vacía es un resultado válido:
    /// la ruta puede existir sin asignaciones, o haberlas perdido por una
    /// cascada de borrado.
    pub async fn get_by_route_id(&self, route_id: i64) -> Result<Vec<RouteDetail>, AppError> {
        self.repository.get_by_route_id(route_id).await
    }

    pub async fn create(&self, request: CreateRouteDetailRequest) -> Result<RouteDetail, AppError> {
        request.validate().map_err(AppError::Validation)?;

        // Los tres padres se resuelven antes del check de identidad,
        // nombrando la entidad que falte
        self.routes
            .get(request.route_id)
            .await?
            .ok_or_else(|| not_found_error("Route", request.route_id))?;
        self.vehicles
            .get(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;
        self.drivers
            .get(request.driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver", request.driver_id))?;

        // Identidad compuesta: como máximo una fila por (route_id, vehicle_id)
        if self
            .repository
            .get_by_key(request.route_id, request.vehicle_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "RouteDetail for route '{}' and vehicle '{}' already exists",
                request.route_id, request.vehicle_id
            )));
        }

        self.repository
            .create(request.route_id, request.vehicle_id, request.driver_id)
            .await
    }

    pub async fn delete(&self, query: DeleteRouteDetailQuery) -> Result<(), AppError> {
        // Existencia por la componente de ruta de la clave compuesta
        let details = self.repository.get_by_route_id(query.route_id).await?;
        if details.is_empty() {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        self.repository
            .delete_by_key(query.route_id, query.vehicle_id, query.driver_id)
            .await
    }

    pub async fn list(&self) -> Result<Vec<RouteDetail>, AppError> {
        self.repository.get_all().await
    }
}
