use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::FleetController;
use crate::models::fleet::{CreateFleetRequest, Fleet, FleetNameQuery, UpdateFleetRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_path_id;

pub fn create_fleet_router() -> Router<AppState> {
    Router::new()
        .route("/fleet/", get(get_fleet_by_name).post(create_fleet))
        .route(
            "/fleet/:id",
            get(get_fleet).put(update_fleet).delete(delete_fleet),
        )
}

async fn get_fleet_by_name(
    State(state): State<AppState>,
    Query(query): Query<FleetNameQuery>,
) -> Result<Json<Fleet>, AppError> {
    let controller = FleetController::new(state.pool.clone());
    Ok(Json(controller.get_by_name(&query.name).await?))
}

async fn get_fleet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Fleet>, AppError> {
    validate_path_id(id)?;
    let controller = FleetController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_fleet(
    State(state): State<AppState>,
    Json(request): Json<CreateFleetRequest>,
) -> Result<(StatusCode, Json<Fleet>), AppError> {
    let controller = FleetController::new(state.pool.clone());
    let fleet = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(fleet)))
}

async fn update_fleet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateFleetRequest>,
) -> Result<Json<Fleet>, AppError> {
    validate_path_id(id)?;
    let controller = FleetController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_fleet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_path_id(id)?;
    let controller = FleetController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "detail": "Fleet deleted successfully"
    })))
}

pub async fn list_fleets(State(state): State<AppState>) -> Result<Json<Vec<Fleet>>, AppError> {
    let controller = FleetController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}
