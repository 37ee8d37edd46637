use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::DriverController;
use crate::models::driver::{CreateDriverRequest, Driver, DriverNameQuery, UpdateDriverRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_path_id;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/driver/", get(get_drivers_by_name).post(create_driver))
        .route(
            "/driver/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}

async fn get_drivers_by_name(
    State(state): State<AppState>,
    Query(query): Query<DriverNameQuery>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.get_by_name(&query.name).await?))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Driver>, AppError> {
    validate_path_id(id)?;
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<Driver>), AppError> {
    let controller = DriverController::new(state.pool.clone());
    let driver = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    validate_path_id(id)?;
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_path_id(id)?;
    let controller = DriverController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "detail": "Driver deleted successfully"
    })))
}

pub async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}
