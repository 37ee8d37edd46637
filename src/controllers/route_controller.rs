use sqlx::PgPool;
use validator::Validate;

use crate::models::route::{CreateRouteRequest, Route, UpdateRouteRequest};
use crate::repositories::RouteRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Route, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Route", id))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Route>, AppError> {
        let routes = self.repository.filter_by_name(name).await?;
        if routes.is_empty() {
            return Err(AppError::NotFound("Route not found".to_string()));
        }
        Ok(routes)
    }

    pub async fn create(&self, request: CreateRouteRequest) -> Result<Route, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if self.repository.get(request.id).await?.is_some() {
            return Err(conflict_error("Route", "id", &request.id.to_string()));
        }

        self.repository.create(request.id, &request.name).await
    }

    pub async fn update(&self, id: i64, request: UpdateRouteRequest) -> Result<Route, AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Route", id))?;

        self.repository.update(id, &request.name).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Route", id))?;

        self.repository.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Route>, AppError> {
        self.repository.get_all().await
    }
}
