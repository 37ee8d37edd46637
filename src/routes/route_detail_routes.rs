use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::RouteDetailController;
use crate::models::route_detail::{
    CreateRouteDetailRequest, DeleteRouteDetailQuery, RouteDetail, RouteDetailNameFilters,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_path_id;

pub fn create_route_detail_router() -> Router<AppState> {
    Router::new()
        .route(
            "/routedetail/",
            get(get_route_details_by_name)
                .post(create_route_detail)
                .delete(delete_route_detail),
        )
        .route("/routedetail/:id", get(get_route_details))
}

/// Join triple filtrado por nombres de ruta, vehículo y/o conductor.
/// Sin ningún nombre responde lista vacía sin consultar el store.
async fn get_route_details_by_name(
    State(state): State<AppState>,
    Query(filters): Query<RouteDetailNameFilters>,
) -> Result<Json<Vec<RouteDetail>>, AppError> {
    let controller = RouteDetailController::new(state.pool.clone());
    Ok(Json(controller.get_by_name(filters).await?))
}

/// Asignaciones de una ruta, por id de ruta
async fn get_route_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RouteDetail>>, AppError> {
    validate_path_id(id)?;
    let controller = RouteDetailController::new(state.pool.clone());
    Ok(Json(controller.get_by_route_id(id).await?))
}

async fn create_route_detail(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteDetailRequest>,
) -> Result<(StatusCode, Json<RouteDetail>), AppError> {
    let controller = RouteDetailController::new(state.pool.clone());
    let detail = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

async fn delete_route_detail(
    State(state): State<AppState>,
    Query(query): Query<DeleteRouteDetailQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RouteDetailController::new(state.pool.clone());
    controller.delete(query).await?;
    Ok(Json(serde_json::json!({
        "detail": "RouteDetail deleted successfully"
    })))
}

pub async fn list_route_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteDetail>>, AppError> {
    let controller = RouteDetailController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}
